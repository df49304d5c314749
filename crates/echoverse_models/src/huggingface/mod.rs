//! HuggingFace Inference API integration for speech synthesis.

mod dto;
mod synthesizer;

pub use dto::{HuggingFaceErrorBody, SpeechRequest};
pub use synthesizer::{HuggingFaceSynthesizer, MAX_INPUT_CHARS, truncate_input};
