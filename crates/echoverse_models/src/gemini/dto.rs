//! Gemini `generateContent` data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Text content (absent for non-text parts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl GeminiPart {
    /// A text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A content block (system instruction, user turn, or candidate output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Role of the author, omitted for the system instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// A content block with a single text part.
    pub fn from_text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GeminiPart::from_text(text)],
        }
    }

    /// All text parts joined together.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

/// Sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
}

/// Body of a `generateContent` request.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GeminiRequest {
    /// Shared editor instruction
    system_instruction: GeminiContent,
    /// The user turn carrying the composed prompt
    contents: Vec<GeminiContent>,
    /// Sampling configuration
    generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// Creates a new builder for `GeminiRequest`.
    pub fn builder() -> GeminiRequestBuilder {
        GeminiRequestBuilder::default()
    }
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GeminiCandidate {
    /// Generated content
    #[serde(default)]
    content: Option<GeminiContent>,
}

/// Body of a `generateContent` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first candidate, trimmed; `None` when there is none.
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.joined_text().trim().to_string())
            .filter(|text| !text.is_empty())
    }
}
