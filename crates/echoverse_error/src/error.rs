//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, NarrationError, StorageError};

/// Every error the EchoVerse crates can surface.
///
/// # Examples
///
/// ```
/// use echoverse_error::{EchoverseError, NarrationError};
///
/// let err: EchoverseError = NarrationError::validation("empty input").into();
/// assert!(format!("{}", err).contains("Narration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EchoverseErrorKind {
    /// Narration pipeline failure
    #[from(NarrationError)]
    Narration(NarrationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Session audio or credential storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// EchoVerse error with kind discrimination.
///
/// # Examples
///
/// ```
/// use echoverse_error::{EchoverseResult, ConfigError};
///
/// fn might_fail() -> EchoverseResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("EchoVerse Error: {}", _0)]
pub struct EchoverseError(Box<EchoverseErrorKind>);

impl EchoverseError {
    /// Create a new error from a kind.
    pub fn new(kind: EchoverseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EchoverseErrorKind {
        &self.0
    }

    /// The narration classification, if this error came from the pipeline.
    pub fn as_narration(&self) -> Option<&NarrationError> {
        match self.kind() {
            EchoverseErrorKind::Narration(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to EchoverseErrorKind
impl<T> From<T> for EchoverseError
where
    T: Into<EchoverseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for EchoVerse operations.
pub type EchoverseResult<T> = std::result::Result<T, EchoverseError>;
