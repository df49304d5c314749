//! Rewrite and speech-synthesis provider clients for EchoVerse.
//!
//! Each provider sits behind its own feature flag (both enabled by default).
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - tone rewriting via `generateContent`, `gemini` feature
//! - **HuggingFace** - speech synthesis via the Inference API, `huggingface` feature
//!
//! ```no_run
//! use echoverse_core::{EchoverseConfig, Tone};
//! use echoverse_interface::Rewriter;
//! use echoverse_models::GeminiRewriter;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EchoverseConfig::load()?;
//! let rewriter = GeminiRewriter::new(&config.rewrite, &config.http)?;
//! let rewritten = rewriter.rewrite("The cat sat down.", Tone::Dramatic).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(feature = "gemini", feature = "huggingface"))]
mod http;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "huggingface")]
mod huggingface;

#[cfg(feature = "gemini")]
pub use gemini::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiRequestBuilder, GeminiResponse, GeminiRewriter, REWRITE_TEMPERATURE,
    SYSTEM_INSTRUCTION, ToneGuidance, compose_prompt, guidance_for,
};

#[cfg(feature = "huggingface")]
pub use huggingface::{
    HuggingFaceErrorBody, HuggingFaceSynthesizer, MAX_INPUT_CHARS, SpeechRequest, truncate_input,
};
