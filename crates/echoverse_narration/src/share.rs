//! Share payloads for rewritten text.

use derive_getters::Getters;
use echoverse_error::{NarrationError, NarrationResult};
use serde::{Deserialize, Serialize};

/// Title attached to every share.
pub const SHARE_TITLE: &str = "EchoVerse AI Narration";

/// Title and body handed to a share target or copied to the clipboard.
///
/// # Examples
///
/// ```
/// use echoverse_narration::SharePayload;
///
/// let payload = SharePayload::for_rewritten("A feline planet.").unwrap();
/// assert_eq!(payload.title(), "EchoVerse AI Narration");
/// assert!(payload.text().ends_with("\"A feline planet.\""));
/// assert!(SharePayload::for_rewritten("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SharePayload {
    /// Share title
    title: String,
    /// Share body quoting the rewritten text
    text: String,
}

impl SharePayload {
    /// Build the payload for `rewritten_text`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when there is no rewritten text yet.
    pub fn for_rewritten(rewritten_text: &str) -> NarrationResult<Self> {
        if rewritten_text.trim().is_empty() {
            return Err(NarrationError::validation("There is no rewritten text to share yet."));
        }

        Ok(Self {
            title: SHARE_TITLE.to_string(),
            text: format!(
                "Check out this AI-rewritten text from EchoVerse:\n\n\"{}\"",
                rewritten_text
            ),
        })
    }
}
