//! Google Gemini integration for tone rewriting.

mod client;
mod dto;
mod prompt;

pub use client::GeminiRewriter;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiRequestBuilder, GeminiResponse,
};
pub use prompt::{
    REWRITE_TEMPERATURE, SYSTEM_INSTRUCTION, ToneGuidance, compose_prompt, guidance_for,
};
