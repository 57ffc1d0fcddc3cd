//! Engine error types.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during conversion.
///
/// Both variants indicate rule-authoring defects. Unmatched input is
/// never an error: it passes through literally.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A repeating correction pass failed to reach a fixed point.
    #[error("Correction pass did not settle after {limit} iterations: {pattern}")]
    RepeatLimit { pattern: String, limit: usize },

    /// A replacement references a capture group the pattern does not have.
    #[error("Replacement references invalid capture group ${reference} in pattern: {pattern}")]
    InvalidCaptureRef { pattern: String, reference: String },
}

impl ConvertError {
    pub fn repeat_limit(pattern: impl Into<String>, limit: usize) -> Self {
        Self::RepeatLimit {
            pattern: pattern.into(),
            limit,
        }
    }

    pub fn invalid_capture_ref(pattern: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::InvalidCaptureRef {
            pattern: pattern.into(),
            reference: reference.into(),
        }
    }
}
