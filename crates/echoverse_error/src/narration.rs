//! Narration pipeline error taxonomy.

/// Classified failure of a narration request.
///
/// Every failure raised by the rewrite or synthesis clients, and every failed
/// precondition checked by the orchestrator, lands in exactly one of these
/// buckets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrationErrorKind {
    /// Bad or missing local input, detected before any network call
    #[display("Validation failed: {}", _0)]
    Validation(String),
    /// Credential rejected by a remote service
    #[display("Authentication failed: {}", _0)]
    Auth(String),
    /// Remote service transiently unavailable (e.g. model warming up)
    #[display("Service temporarily unavailable: {}", _0)]
    Retryable(String),
    /// Remote service returned an unexpected or failed result
    #[display("Upstream service error: {}", _0)]
    Upstream(String),
    /// No response reached the remote service
    #[display("Network error: {}", _0)]
    Network(String),
}

impl NarrationErrorKind {
    /// Whether the user may reasonably try the same request again shortly.
    ///
    /// This is advisory only. Nothing in the pipeline retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NarrationErrorKind::Retryable(_) | NarrationErrorKind::Network(_)
        )
    }

    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            NarrationErrorKind::Validation(reason) => match reason.as_str() {
                "empty input" => "Please enter some text to generate an audiobook.".to_string(),
                "missing credential" => {
                    "Hugging Face API key is missing. Please set it first.".to_string()
                }
                other => other.to_string(),
            },
            NarrationErrorKind::Auth(reason) => format!("Authentication failed: {}.", reason),
            NarrationErrorKind::Retryable(reason) => {
                format!("{}. Please try again in a moment.", reason)
            }
            NarrationErrorKind::Upstream(reason) => format!("Generation failed: {}.", reason),
            NarrationErrorKind::Network(_) => {
                "A network error occurred. Please check your connection and try again."
                    .to_string()
            }
        }
    }
}

/// Narration error with source location tracking.
///
/// # Examples
///
/// ```
/// use echoverse_error::{NarrationError, NarrationErrorKind};
///
/// let err = NarrationError::new(NarrationErrorKind::Validation("empty input".to_string()));
/// assert!(format!("{}", err).contains("empty input"));
/// assert!(!err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narration Error: {} at line {} in {}", kind, line, file)]
pub struct NarrationError {
    /// The kind of error that occurred
    pub kind: NarrationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NarrationError {
    /// Create a new NarrationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a validation failure.
    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::new(NarrationErrorKind::Validation(reason.into()))
    }

    /// Shorthand for an upstream failure.
    #[track_caller]
    pub fn upstream(reason: impl Into<String>) -> Self {
        Self::new(NarrationErrorKind::Upstream(reason.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NarrationErrorKind {
        &self.kind
    }

    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        self.kind.user_message()
    }
}

/// Result type for narration pipeline operations.
pub type NarrationResult<T> = std::result::Result<T, NarrationError>;
