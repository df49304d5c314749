//! Synthesis service access token.

use serde::{Deserialize, Serialize};

/// Access token for the speech-synthesis service.
///
/// The value never appears in `Debug` output or logs.
///
/// # Examples
///
/// ```
/// use echoverse_core::Credential;
///
/// let credential = Credential::new("hf_secret");
/// assert_eq!(credential.expose(), "hf_secret");
/// assert!(!format!("{:?}", credential).contains("secret"));
/// assert!(Credential::new("   ").is_blank());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the token is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}
