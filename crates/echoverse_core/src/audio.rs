//! Opaque audio handles.

use derive_getters::Getters;
use uuid::Uuid;

/// Reference to synthesized audio held for the lifetime of the session.
///
/// A handle carries no audio itself; the bytes are resolved through the session
/// audio store that issued it. Every call to [`AudioHandle::new`] yields a
/// distinct id, so two syntheses never share a handle.
///
/// # Examples
///
/// ```
/// use echoverse_core::AudioHandle;
///
/// let first = AudioHandle::new("audio/flac", 1024);
/// let second = AudioHandle::new("audio/flac", 1024);
/// assert_ne!(first, second);
/// assert_eq!(first.mime_type(), "audio/flac");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct AudioHandle {
    /// Session-unique identifier
    id: Uuid,
    /// MIME type reported by the synthesis service
    mime_type: String,
    /// Size of the audio payload in bytes
    size_bytes: usize,
}

impl AudioHandle {
    /// Issue a fresh handle for an audio payload.
    pub fn new(mime_type: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

impl std::fmt::Display for AudioHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "audio:{}", self.id)
    }
}
