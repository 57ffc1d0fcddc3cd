//! Registry error types.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during rule-set lookup.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Resolve of a name that was never registered. A caller-programming
    /// error, never retried automatically.
    #[error("Unknown script: {name}")]
    UnknownScript { name: String },
}

impl RegistryError {
    pub fn unknown_script(name: impl Into<String>) -> Self {
        Self::UnknownScript { name: name.into() }
    }
}
