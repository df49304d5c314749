//! Trait definitions for the rewrite and synthesis collaborators.

use async_trait::async_trait;
use echoverse_core::{AudioHandle, Credential, Tone, Voice};
use echoverse_error::NarrationResult;

/// Rewrites source text in a selected tone.
///
/// Implementations hold no state across calls: one request, one response.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewrite `text` in `tone`, returning the whitespace-trimmed result.
    ///
    /// # Errors
    ///
    /// - `Upstream("empty response")` when the service returns no text
    /// - `Auth` when the service rejects its credential
    /// - `Upstream` for any other failure
    async fn rewrite(&self, text: &str, tone: Tone) -> NarrationResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Synthesizes narrated audio from text.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` with `voice`, returning a handle to playable audio.
    ///
    /// # Errors
    ///
    /// - `Validation` when `credential` is blank (no request is sent)
    /// - `Auth` when the service answers 401
    /// - `Retryable` when the backing model is still loading
    /// - `Upstream` for other failed statuses or a non-audio payload
    /// - `Network` when no response arrives
    async fn synthesize(
        &self,
        text: &str,
        voice: Voice,
        credential: &Credential,
    ) -> NarrationResult<AudioHandle>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;
}
