//! In-memory audio storage for the current session.

use echoverse_core::AudioHandle;
use echoverse_error::{EchoverseResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

/// File name used when a narration is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "echoverse_narration.mp3";

/// Trait for stores that turn audio bytes into session handles.
///
/// Handles stay valid for the lifetime of the store; nothing expires or is
/// revoked.
#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    /// Store audio and issue a fresh handle for it.
    ///
    /// Storing identical bytes twice yields two distinct handles.
    async fn store(&self, data: Vec<u8>, mime_type: &str) -> EchoverseResult<AudioHandle>;

    /// Retrieve the audio bytes behind a handle.
    async fn retrieve(&self, handle: &AudioHandle) -> EchoverseResult<Arc<[u8]>>;

    /// Check whether a handle was issued by this store.
    async fn contains(&self, handle: &AudioHandle) -> bool;

    /// Write the audio behind `handle` into `dir` as [`DOWNLOAD_FILE_NAME`].
    ///
    /// Returns the path written.
    async fn export(&self, handle: &AudioHandle, dir: &Path) -> EchoverseResult<PathBuf>;
}

/// Session-scoped audio store backed by a hash map.
///
/// Cloning the store shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct SessionAudioStore {
    clips: Arc<RwLock<HashMap<Uuid, Arc<[u8]>>>>,
}

impl SessionAudioStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clips held.
    pub async fn len(&self) -> usize {
        self.clips.read().await.len()
    }

    /// True when no clip has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.clips.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AudioStore for SessionAudioStore {
    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn store(&self, data: Vec<u8>, mime_type: &str) -> EchoverseResult<AudioHandle> {
        let handle = AudioHandle::new(mime_type, data.len());
        self.clips
            .write()
            .await
            .insert(*handle.id(), Arc::from(data));
        debug!(handle = %handle, "Stored session audio");
        Ok(handle)
    }

    async fn retrieve(&self, handle: &AudioHandle) -> EchoverseResult<Arc<[u8]>> {
        self.clips
            .read()
            .await
            .get(handle.id())
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(handle.to_string())).into())
    }

    async fn contains(&self, handle: &AudioHandle) -> bool {
        self.clips.read().await.contains_key(handle.id())
    }

    #[instrument(skip(self), fields(handle = %handle, dir = %dir.display()))]
    async fn export(&self, handle: &AudioHandle, dir: &Path) -> EchoverseResult<PathBuf> {
        let data = self.retrieve(handle).await?;

        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let path = dir.join(DOWNLOAD_FILE_NAME);
        tokio::fs::write(&path, &data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Exported narration audio");
        Ok(path)
    }
}
