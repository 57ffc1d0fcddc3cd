//! Compiler error types.

use thiserror::Error;

/// Errors that can occur during compilation.
///
/// All of them are rule-authoring defects: a script whose table fails to
/// compile must not be registered.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A literal block with no entries has no length range to derive.
    #[error("Block {block}: mapping has no entries")]
    EmptyMapping { block: usize },

    /// An empty key cannot be matched by a length-partitioned scan.
    #[error("Block {block}: mapping contains an empty key")]
    EmptyKey { block: usize },

    /// A pattern failed to parse as a regular expression.
    #[error("Block {block}: invalid pattern: {source}")]
    Pattern {
        block: usize,
        #[source]
        source: Box<regex::Error>,
    },

    /// An undo pair must be fully specified or fully absent.
    #[error("Block {block}: undo pattern and replacement must be given together")]
    IncompleteUndo { block: usize },
}

impl CompileError {
    pub fn pattern(block: usize, source: regex::Error) -> Self {
        Self::Pattern {
            block,
            source: Box::new(source),
        }
    }
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
