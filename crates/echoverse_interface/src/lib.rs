//! Trait definitions for the EchoVerse narration library.
//!
//! The narration orchestrator talks to its two remote collaborators only
//! through these traits, so tests and alternative providers can stand in for
//! the real HTTP clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Rewriter, Synthesizer};
