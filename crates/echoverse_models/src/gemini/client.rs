//! Gemini `generateContent` client.

use super::dto::{GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse};
use super::prompt::{REWRITE_TEMPERATURE, SYSTEM_INSTRUCTION, compose_prompt};
use crate::http::build_client;
use async_trait::async_trait;
use echoverse_core::{HttpSettings, RewriteSettings, Tone};
use echoverse_error::{
    ConfigError, EchoverseResult, NarrationError, NarrationErrorKind, NarrationResult,
};
use echoverse_interface::Rewriter;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument};

/// Environment variable holding the Gemini API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Generic reason reported for any failure that is not an auth problem.
const GENERIC_FAILURE: &str = "the text rewrite request failed";

/// Rewrites text in a requested tone with Gemini.
#[derive(Clone)]
pub struct GeminiRewriter {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiRewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiRewriter")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiRewriter {
    /// Creates a rewriter reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or the HTTP
    /// client cannot be built.
    #[instrument(skip_all, fields(model = %rewrite.model))]
    pub fn new(rewrite: &RewriteSettings, http: &HttpSettings) -> EchoverseResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|e| ConfigError::new(format!("{} not set: {}", API_KEY_VAR, e)))?;

        Self::with_api_key(api_key, rewrite, http)
    }

    /// Creates a rewriter with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip(api_key, rewrite, http), fields(model = %rewrite.model))]
    pub fn with_api_key(
        api_key: impl Into<String>,
        rewrite: &RewriteSettings,
        http: &HttpSettings,
    ) -> EchoverseResult<Self> {
        let client = build_client(http)?;

        debug!(base_url = %rewrite.base_url, "Created Gemini rewriter");

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: rewrite.model.clone(),
            base_url: rewrite.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Model used for every rewrite.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(text: &str, tone: Tone) -> NarrationResult<GeminiRequest> {
        GeminiRequest::builder()
            .system_instruction(GeminiContent::from_text(None, SYSTEM_INSTRUCTION))
            .contents(vec![GeminiContent::from_text(
                Some("user"),
                compose_prompt(text, tone),
            )])
            .generation_config(GeminiGenerationConfig {
                temperature: REWRITE_TEMPERATURE,
            })
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build Gemini request");
                NarrationError::upstream(GENERIC_FAILURE)
            })
    }
}

/// Whether a failed status and body amount to a rejected API key.
fn is_auth_failure(status: StatusCode, body: &str) -> bool {
    status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || (status == StatusCode::BAD_REQUEST && body.contains("API key not valid"))
}

#[async_trait]
impl Rewriter for GeminiRewriter {
    #[instrument(skip(self, text), fields(model = %self.model, tone = %tone, text_len = text.len()))]
    async fn rewrite(&self, text: &str, tone: Tone) -> NarrationResult<String> {
        let request = Self::build_request(text, tone)?;

        debug!("Sending request to Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                NarrationError::upstream(GENERIC_FAILURE)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API error");

            if is_auth_failure(status, &body) {
                return Err(NarrationError::new(NarrationErrorKind::Auth(
                    "the text rewrite service rejected the API key".to_string(),
                )));
            }
            return Err(NarrationError::upstream(GENERIC_FAILURE));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Gemini response");
            NarrationError::upstream(GENERIC_FAILURE)
        })?;
        if body.trim().is_empty() {
            return Err(NarrationError::upstream("empty response"));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            NarrationError::upstream(GENERIC_FAILURE)
        })?;

        let rewritten = parsed
            .first_text()
            .ok_or_else(|| NarrationError::upstream("empty response"))?;

        debug!(rewritten_len = rewritten.len(), "Received rewritten text");
        Ok(rewritten)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_detection() {
        assert!(is_auth_failure(StatusCode::UNAUTHORIZED, ""));
        assert!(is_auth_failure(StatusCode::FORBIDDEN, ""));
        assert!(is_auth_failure(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"API key not valid. Please pass a valid API key."}}"#
        ));
        assert!(!is_auth_failure(StatusCode::BAD_REQUEST, "malformed"));
        assert!(!is_auth_failure(StatusCode::INTERNAL_SERVER_ERROR, ""));
    }
}
