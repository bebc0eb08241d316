//! Error types for catalog validation and loading.

use thiserror::Error;

/// Result type for catalog operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Error codes for catalog validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Catalog contains no sounds
    EmptyCatalog,
    /// E002: Sound name is not a safe file stem
    InvalidSoundName,
    /// E003: Two sounds share a name
    DuplicateSoundName,
    /// E004: Sound has no segments
    NoSegments,
    /// E005: Segment duration is negative or not finite
    InvalidDuration,
    /// E006: Segment fade time is negative or not finite
    InvalidFade,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyCatalog => "E001",
            ErrorCode::InvalidSoundName => "E002",
            ErrorCode::DuplicateSoundName => "E003",
            ErrorCode::NoSegments => "E004",
            ErrorCode::InvalidDuration => "E005",
            ErrorCode::InvalidFade => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "sounds\[0\].segments\[1\].duration_ms").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error type for catalog operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Catalog validation failed with one or more errors.
    #[error("catalog validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of catalog validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> SpecResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SpecError::ValidationFailed(self.errors))
        }
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI can report
/// failures with a stable code regardless of which backend produced them.
///
/// # Example
///
/// ```ignore
/// use termsound_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". These codes are stable and
    /// can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
