//! HuggingFace text-to-speech client.

use super::dto::{HuggingFaceErrorBody, SpeechRequest};
use crate::http::build_client;
use async_trait::async_trait;
use echoverse_core::{AudioHandle, Credential, HttpSettings, SynthesisSettings, Voice};
use echoverse_error::{EchoverseResult, NarrationError, NarrationErrorKind, NarrationResult};
use echoverse_interface::Synthesizer;
use echoverse_storage::AudioStore;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Longest input, in characters, sent to the speech models.
pub const MAX_INPUT_CHARS: usize = 500;

/// Cut `text` down to at most [`MAX_INPUT_CHARS`] characters.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
///
/// ```
/// use echoverse_models::{MAX_INPUT_CHARS, truncate_input};
///
/// let long = "é".repeat(MAX_INPUT_CHARS + 1);
/// assert_eq!(truncate_input(&long).chars().count(), MAX_INPUT_CHARS);
/// assert_eq!(truncate_input("short"), "short");
/// ```
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Synthesizes speech with the HuggingFace Inference API.
///
/// Audio bytes are handed to the session [`AudioStore`] and only the handle is
/// returned.
#[derive(Clone)]
pub struct HuggingFaceSynthesizer {
    client: Client,
    base_url: String,
    store: Arc<dyn AudioStore>,
}

impl std::fmt::Debug for HuggingFaceSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceSynthesizer")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceSynthesizer {
    /// Creates a synthesizer registering audio in `store`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip_all, fields(base_url = %synthesis.base_url))]
    pub fn new(
        synthesis: &SynthesisSettings,
        http: &HttpSettings,
        store: Arc<dyn AudioStore>,
    ) -> EchoverseResult<Self> {
        let client = build_client(http)?;

        debug!("Created HuggingFace synthesizer");

        Ok(Self {
            client,
            base_url: synthesis.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Model id serving `voice`.
    pub fn model_for(voice: Voice) -> &'static str {
        match voice {
            Voice::Female => "espnet/kan-bayashi_ljspeech_vits",
            Voice::Male => "facebook/mms-tts-eng",
        }
    }

    fn classify_failure(status: StatusCode, body: &str, voice: Voice) -> NarrationError {
        if status == StatusCode::UNAUTHORIZED {
            return NarrationError::new(NarrationErrorKind::Auth(
                "invalid or unauthorized credential".to_string(),
            ));
        }

        if let Some(parsed) = HuggingFaceErrorBody::parse(body)
            && parsed.is_model_loading()
        {
            debug!(estimated_time = ?parsed.estimated_time(), "Voice model is loading");
            return NarrationError::new(NarrationErrorKind::Retryable(format!(
                "The {} voice model is currently loading",
                voice
            )));
        }

        NarrationError::upstream(format!("HTTP {}", status.as_u16()))
    }
}

#[async_trait]
impl Synthesizer for HuggingFaceSynthesizer {
    #[instrument(skip(self, text, credential), fields(voice = %voice, text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Voice,
        credential: &Credential,
    ) -> NarrationResult<AudioHandle> {
        if credential.is_blank() {
            return Err(NarrationError::validation("missing credential"));
        }

        let model = Self::model_for(voice);
        let url = format!("{}/{}", self.base_url, model);
        let inputs = truncate_input(text);

        debug!(
            model = model,
            url = %url,
            inputs_len = inputs.chars().count(),
            "Sending request to HuggingFace"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .json(&SpeechRequest { inputs })
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                NarrationError::new(NarrationErrorKind::Network(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "HuggingFace API error");
            return Err(Self::classify_failure(status, &body, voice));
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_default();

        if !mime_type.starts_with("audio/") {
            warn!(content_type = %mime_type, "Unexpected synthesis payload");
            return Err(NarrationError::upstream("invalid audio payload"));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read audio body");
            NarrationError::new(NarrationErrorKind::Network(e.to_string()))
        })?;

        let handle = self
            .store
            .store(bytes.to_vec(), &mime_type)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store synthesized audio");
                NarrationError::upstream("audio could not be stored")
            })?;

        debug!(handle = %handle, bytes = handle.size_bytes(), "Synthesized audio");
        Ok(handle)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_boundary() {
        let exact = "a".repeat(MAX_INPUT_CHARS);
        assert_eq!(truncate_input(&exact).len(), MAX_INPUT_CHARS);

        let over = "a".repeat(MAX_INPUT_CHARS + 1);
        assert_eq!(truncate_input(&over).len(), MAX_INPUT_CHARS);
    }

    #[test]
    fn loading_body_is_retryable() {
        let err = HuggingFaceSynthesizer::classify_failure(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"error":"Model espnet/kan-bayashi_ljspeech_vits is currently loading","estimated_time":20.0}"#,
            Voice::Female,
        );
        assert!(err.kind().is_retryable());
        assert!(err.user_message().contains("Female voice model is currently loading"));
    }

    #[test]
    fn other_statuses_are_upstream() {
        let err = HuggingFaceSynthesizer::classify_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
            Voice::Male,
        );
        assert_eq!(
            err.kind(),
            &NarrationErrorKind::Upstream("HTTP 500".to_string())
        );
    }
}
