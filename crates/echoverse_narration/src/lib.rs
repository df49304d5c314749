//! Narration pipeline for EchoVerse.
//!
//! This crate drives one narration request end to end: validate the input,
//! rewrite it in the chosen tone, synthesize the rewrite, and commit the result
//! to the session history.
//!
//! # Pipeline
//!
//! [`NarrationOrchestrator::generate`] runs the two remote stages strictly in
//! order and publishes its progress as a [`Lifecycle`] on a watch channel:
//!
//! ```text
//! Idle -> Rewriting -> Synthesizing -> Success
//!             \             \
//!              +-------------+-> Failed(message)
//! ```
//!
//! A [`Narration`](echoverse_core::Narration) reaches the [`HistoryStore`] only
//! after both stages succeed.
//!
//! # Example
//!
//! ```rust,ignore
//! use echoverse_narration::NarrationOrchestrator;
//!
//! let mut orchestrator = NarrationOrchestrator::new(rewriter, synthesizer);
//! let narration = orchestrator
//!     .generate("Once upon a time...", Tone::Dramatic, Voice::Female, Some(&credential))
//!     .await?;
//! println!("{}", narration.summary());
//! ```
//!
//! The remaining modules hold the presentation-side state a front end needs:
//! [`DisplayState`], [`PlayerState`], [`SharePayload`], and text-file
//! [`ingest`](read_text_file).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod display;
mod history;
mod ingest;
mod lifecycle;
mod orchestrator;
mod player;
mod share;

pub use display::DisplayState;
pub use history::HistoryStore;
pub use ingest::{INVALID_FILE_MESSAGE, MAX_FILE_BYTES, read_text_file};
pub use lifecycle::Lifecycle;
pub use orchestrator::NarrationOrchestrator;
pub use player::{PLAYBACK_RATES, PlayerState, VolumeLevel, format_time};
pub use share::{SHARE_TITLE, SharePayload};
