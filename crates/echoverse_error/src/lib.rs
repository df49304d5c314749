//! Error types for the EchoVerse library.
//!
//! This crate provides the foundation error types used throughout the EchoVerse workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! [`NarrationError`] carries the classification the narration pipeline exposes to
//! users (validation, auth, retryable, upstream, network). Everything else
//! (configuration, JSON, storage) rides in [`EchoverseError`].
//!
//! # Examples
//!
//! ```
//! use echoverse_error::{EchoverseResult, ConfigError};
//!
//! fn load_settings() -> EchoverseResult<String> {
//!     Err(ConfigError::new("Missing [rewrite] section"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod narration;
mod storage;

pub use config::ConfigError;
pub use error::{EchoverseError, EchoverseErrorKind, EchoverseResult};
pub use json::JsonError;
pub use narration::{NarrationError, NarrationErrorKind, NarrationResult};
pub use storage::{StorageError, StorageErrorKind};
