//! Session audio and credential storage for EchoVerse.
//!
//! Two small stores live here:
//!
//! - [`SessionAudioStore`] keeps synthesized audio in memory for the lifetime of
//!   the session and hands out opaque [`AudioHandle`](echoverse_core::AudioHandle)s.
//!   Handles can be exported to disk as `echoverse_narration.mp3`.
//! - [`CredentialStore`] persists the synthesis access token in a small JSON
//!   key/value file under a fixed key.
//!
//! # Example
//!
//! ```rust
//! use echoverse_storage::{AudioStore, SessionAudioStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SessionAudioStore::new();
//! let handle = store.store(vec![0u8; 1024], "audio/flac").await?;
//!
//! let retrieved = store.retrieve(&handle).await?;
//! assert_eq!(retrieved.len(), 1024);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio_store;
mod credential_store;

pub use audio_store::{AudioStore, DOWNLOAD_FILE_NAME, SessionAudioStore};
pub use credential_store::{CREDENTIAL_KEY, CREDENTIALS_FILE_NAME, CredentialStore};
