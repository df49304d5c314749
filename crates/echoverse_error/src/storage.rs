//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create a directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Audio not found for the given handle
    #[display("Audio not found: {}", _0)]
    NotFound(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use echoverse_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("3f2a".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(kind: &StorageErrorKind) -> &'static str {
        match kind {
            StorageErrorKind::DirectoryCreation(_) => "Failed to create directory",
            StorageErrorKind::FileWrite(_) => "Failed to write file",
            StorageErrorKind::FileRead(_) => "Failed to read file",
            StorageErrorKind::NotFound(_) => "Audio not found",
        }
    }

    #[test]
    fn every_kind_displays_its_label() {
        let kinds = [
            StorageErrorKind::DirectoryCreation("/tmp/a".into()),
            StorageErrorKind::FileWrite("/tmp/a/b".into()),
            StorageErrorKind::FileRead("/tmp/a/b".into()),
            StorageErrorKind::NotFound("audio:1".into()),
        ];
        for kind in kinds {
            let err = StorageError::new(kind.clone());
            assert!(format!("{}", err).contains(label(&kind)));
        }
    }
}
