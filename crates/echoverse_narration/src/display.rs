//! What the page currently shows.

use derive_getters::Getters;
use echoverse_core::{AudioHandle, Narration, Tone, Voice};

/// Texts, audio and selections currently on display.
///
/// Only the orchestrator mutates this; front ends read it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct DisplayState {
    /// Text as submitted
    original_text: String,
    /// Text returned by the rewrite service, empty until it arrives
    rewritten_text: String,
    /// Synthesized audio, absent until synthesis succeeds
    audio: Option<AudioHandle>,
    /// Tone of the request on display
    tone: Tone,
    /// Voice of the request on display
    voice: Voice,
}

impl DisplayState {
    /// True when there is neither rewritten text nor audio to show.
    pub fn is_empty(&self) -> bool {
        self.rewritten_text.is_empty() && self.audio.is_none()
    }

    pub(crate) fn begin(&mut self, original_text: &str, tone: Tone, voice: Voice) {
        self.original_text = original_text.to_string();
        self.tone = tone;
        self.voice = voice;
        self.rewritten_text.clear();
        self.audio = None;
    }

    pub(crate) fn set_rewritten(&mut self, rewritten_text: &str) {
        self.rewritten_text = rewritten_text.to_string();
    }

    pub(crate) fn set_audio(&mut self, audio: AudioHandle) {
        self.audio = Some(audio);
    }

    pub(crate) fn show(&mut self, narration: &Narration) {
        self.original_text = narration.original_text().clone();
        self.rewritten_text = narration.rewritten_text().clone();
        self.audio = Some(narration.audio().clone());
        self.tone = *narration.tone();
        self.voice = *narration.voice();
    }
}
