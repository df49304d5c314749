//! Credential persistence.
//!
//! The synthesis access token is kept in a JSON key/value file so that it
//! survives between sessions, the same way a browser keeps it in local storage.

use echoverse_core::Credential;
use echoverse_error::{
    EchoverseResult, JsonError, NarrationError, StorageError, StorageErrorKind,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key under which the synthesis token is stored.
pub const CREDENTIAL_KEY: &str = "hfApiKey";

/// Name of the key/value file inside the configuration directory.
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";

/// Reads and writes the synthesis credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// Directory holding the credentials file
    dir: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at `dir`. The directory is created lazily on save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the key/value file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE_NAME)
    }

    fn read_entries(&self) -> EchoverseResult<HashMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        let entries = serde_json::from_str(&contents)
            .map_err(|e| JsonError::new(format!("Failed to parse credentials file: {}", e)))?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> EchoverseResult<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.dir.display(),
                    e
                )))
            })?;
        }

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| JsonError::new(format!("Failed to serialize credentials: {}", e)))?;

        let path = self.path();
        std::fs::write(&path, contents).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(())
    }

    /// Load the stored credential, if any.
    ///
    /// A missing file, a missing key, or a blank value all load as `None`.
    pub fn load(&self) -> EchoverseResult<Option<Credential>> {
        let credential = self
            .read_entries()?
            .remove(CREDENTIAL_KEY)
            .map(Credential::new)
            .filter(|credential| !credential.is_blank());
        debug!(present = credential.is_some(), "Loaded stored credential");
        Ok(credential)
    }

    /// Persist `credential`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank credential, or a storage error if
    /// the file cannot be written.
    pub fn save_credential(&self, credential: &Credential) -> EchoverseResult<()> {
        if credential.is_blank() {
            return Err(NarrationError::validation("missing credential").into());
        }

        let mut entries = self.read_entries()?;
        entries.insert(CREDENTIAL_KEY.to_string(), credential.expose().to_string());
        self.write_entries(&entries)?;
        debug!(path = %self.path().display(), "Saved credential");
        Ok(())
    }

    /// Remove the stored credential. Other keys in the file are kept.
    pub fn clear(&self) -> EchoverseResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(CREDENTIAL_KEY).is_some() {
            self.write_entries(&entries)?;
            debug!("Cleared stored credential");
        }
        Ok(())
    }
}
