//! Error types for audio backend.

use termsound_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Segment duration is negative or not finite.
    #[error("invalid duration: {duration_ms} ms")]
    InvalidDuration {
        /// The invalid duration.
        duration_ms: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Encoded payload does not fit a RIFF size field.
    #[error("audio too long for WAV: {num_samples} samples")]
    TooLong {
        /// Number of samples requested.
        num_samples: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidDuration { .. } => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::TooLong { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_message() {
        let err = AudioError::InvalidDuration { duration_ms: -5.0 };
        assert_eq!(err.to_string(), "invalid duration: -5 ms");
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AudioError = io.into();
        assert!(err.to_string().contains("read-only"));
        assert_eq!(err.code(), "AUDIO_004");
    }
}
