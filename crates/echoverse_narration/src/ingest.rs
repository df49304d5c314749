//! Plain-text file ingestion.

use echoverse_error::{EchoverseResult, NarrationError, StorageError, StorageErrorKind};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Largest file accepted, in bytes (200 MiB).
pub const MAX_FILE_BYTES: u64 = 200 * 1024 * 1024;

/// Message reported for any file that is not acceptable plain text.
pub const INVALID_FILE_MESSAGE: &str = "Please upload a valid .txt file.";

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Read a `.txt` file into memory as the original text.
///
/// # Errors
///
/// Returns a validation error carrying [`INVALID_FILE_MESSAGE`] when the file
/// does not end in `.txt` (any case), exceeds [`MAX_FILE_BYTES`], or is not
/// UTF-8. Returns a storage error when the file cannot be read.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn read_text_file(path: impl AsRef<Path>) -> EchoverseResult<String> {
    let path = path.as_ref();

    if !has_txt_extension(path) {
        warn!("Rejected file without .txt extension");
        return Err(NarrationError::validation(INVALID_FILE_MESSAGE).into());
    }

    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        let kind = match e.kind() {
            ErrorKind::NotFound => StorageErrorKind::NotFound(path.display().to_string()),
            _ => StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)),
        };
        StorageError::new(kind)
    })?;

    if !metadata.is_file() || metadata.len() > MAX_FILE_BYTES {
        warn!(size = metadata.len(), "Rejected oversized or non-regular file");
        return Err(NarrationError::validation(INVALID_FILE_MESSAGE).into());
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let text = String::from_utf8(bytes).map_err(|_| {
        warn!("Rejected file that is not valid UTF-8");
        NarrationError::validation(INVALID_FILE_MESSAGE)
    })?;

    debug!(chars = text.chars().count(), "Read text file");
    Ok(text)
}
