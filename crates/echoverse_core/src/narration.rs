//! Committed narration records.

use crate::{AudioHandle, Tone, Voice};
use chrono::{DateTime, Local, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use uuid::Uuid;

/// Number of characters of the original text shown in a history line.
const SUMMARY_PREVIEW_CHARS: usize = 50;

/// One completed generation: the rewrite and its synthesized audio.
///
/// A `Narration` is only ever built after both the rewrite and the synthesis
/// stage succeeded.
///
/// # Examples
///
/// ```
/// use echoverse_core::{AudioHandle, Narration, Tone, Voice};
///
/// let narration = Narration::builder()
///     .original_text("He walked into the dark room.")
///     .rewritten_text("Each footstep echoed...")
///     .tone(Tone::Suspenseful)
///     .voice(Voice::Male)
///     .audio(AudioHandle::new("audio/flac", 2048))
///     .build()
///     .unwrap();
///
/// assert_eq!(narration.tone(), &Tone::Suspenseful);
/// assert!(narration.summary().starts_with("He walked into the dark room...."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct Narration {
    /// Unique identity of this record
    #[builder(default = "Uuid::new_v4()")]
    id: Uuid,
    /// Text as submitted by the user
    original_text: String,
    /// Text as returned by the rewrite service
    rewritten_text: String,
    /// Tone used for the rewrite
    tone: Tone,
    /// Voice used for synthesis
    voice: Voice,
    /// Handle to the synthesized audio
    audio: AudioHandle,
    /// When the narration was committed
    #[builder(default = "Utc::now()")]
    created_at: DateTime<Utc>,
}

impl Narration {
    /// Creates a new builder for `Narration`.
    pub fn builder() -> NarrationBuilder {
        NarrationBuilder::default()
    }

    /// One-line description used by history listings.
    ///
    /// Shows the first 50 characters of the original text, then tone, voice and
    /// the local creation time.
    pub fn summary(&self) -> String {
        let preview: String = self
            .original_text
            .chars()
            .take(SUMMARY_PREVIEW_CHARS)
            .collect();
        let local: DateTime<Local> = self.created_at.with_timezone(&Local);
        format!(
            "{}... | {} | {} | {}",
            preview,
            self.tone,
            self.voice,
            local.format("%H:%M:%S")
        )
    }
}
