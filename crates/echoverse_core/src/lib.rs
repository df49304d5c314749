//! Core data types for the EchoVerse narration library.
//!
//! This crate provides the foundation data types shared by every EchoVerse crate:
//! the tone and voice selections, the synthesis credential, the opaque audio
//! handle, the committed [`Narration`] record, and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod config;
mod credential;
mod narration;
mod tone;
mod voice;

pub use audio::AudioHandle;
pub use config::{
    EchoverseConfig, HttpSettings, RewriteSettings, StorageSettings, SynthesisSettings,
};
pub use credential::Credential;
pub use narration::{Narration, NarrationBuilder};
pub use tone::Tone;
pub use voice::Voice;
