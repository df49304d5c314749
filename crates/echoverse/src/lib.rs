//! EchoVerse - AI narration from plain text
//!
//! EchoVerse rewrites a passage in a chosen emotional tone with Google Gemini,
//! then narrates the rewrite with a HuggingFace text-to-speech model. Each
//! finished narration lands in a session history that can be replayed,
//! downloaded, or shared.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use echoverse::{Credential, EchoverseApp, EchoverseConfig, Tone, Voice};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut app = EchoverseApp::from_config(EchoverseConfig::load()?)?;
//!     let credential = Credential::new(std::env::var("HF_API_KEY")?);
//!
//!     let narration = app
//!         .orchestrator_mut()
//!         .generate("The storm reached the coast.", Tone::Dramatic, Voice::Female, Some(&credential))
//!         .await?;
//!
//!     let path = app.download(narration.audio(), ".").await?;
//!     println!("Saved {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export spans to stdout through OpenTelemetry
//!
//! # Architecture
//!
//! EchoVerse is organized as a workspace with focused crates:
//!
//! - `echoverse-error` - Error types and the narration failure taxonomy
//! - `echoverse-core` - Tone, voice, credential, audio handle, narration, configuration
//! - `echoverse-interface` - `Rewriter` and `Synthesizer` traits
//! - `echoverse-storage` - Session audio store and credential file
//! - `echoverse-models` - Gemini and HuggingFace clients
//! - `echoverse-narration` - Orchestrator, lifecycle, history, player, share, ingest
//!
//! This crate (`echoverse`) re-exports everything for convenience and ships
//! the `echoverse` binary.

mod app;
pub mod observability;

pub use app::{DefaultOrchestrator, EchoverseApp};

// Re-export workspace crates
pub use echoverse_core::*;
pub use echoverse_error::*;
pub use echoverse_interface::*;
pub use echoverse_models::*;
pub use echoverse_narration::*;
pub use echoverse_storage::*;
