//! Request lifecycle states.

use serde::{Deserialize, Serialize};

/// Progress of the current (or most recent) narration request.
///
/// Exactly one value exists per orchestrator and each request overwrites it.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Lifecycle {
    /// No request has run yet
    #[default]
    #[display("Idle")]
    Idle,
    /// Waiting on the rewrite service
    #[display("Rewriting text")]
    Rewriting,
    /// Waiting on the synthesis service
    #[display("Generating audio")]
    Synthesizing,
    /// The last request committed a narration
    #[display("Done")]
    Success,
    /// The last request failed with this user-facing message
    #[display("Error: {}", _0)]
    Failed(String),
}

impl Lifecycle {
    /// True while a remote call is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, Lifecycle::Rewriting | Lifecycle::Synthesizing)
    }

    /// The failure message, if the last request failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Lifecycle::Failed(message) => Some(message),
            _ => None,
        }
    }
}
