//! HuggingFace Inference API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of a text-to-speech request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechRequest<'a> {
    /// Text to speak
    pub inputs: &'a str,
}

/// Error body returned on a failed request.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct HuggingFaceErrorBody {
    /// Human-readable reason
    #[serde(default)]
    error: Option<String>,
    /// Seconds until a loading model is expected to be ready
    #[serde(default)]
    estimated_time: Option<f64>,
}

impl HuggingFaceErrorBody {
    /// Parse an error body, tolerating anything that is not the expected JSON.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Whether the service reports the model as still warming up.
    pub fn is_model_loading(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|message| message.contains("is currently loading"))
    }
}
