//! Table loading error types.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading a rule-table document.
#[derive(Debug, Error)]
pub enum TableError {
    /// Underlying I/O failure.
    #[error("Failed to read table document: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or does not match the schema.
    #[error("Malformed table document: {0}")]
    Parse(#[from] serde_json::Error),
}
