//! Scriptcon Engine
//!
//! Apply a compiled rule set to text.
//!
//! Responsibilities:
//! - Run passes in sequence, each rewriting the whole working text
//! - Literal longest-match substitution over fixed-length codepoint
//!   windows, forward or reverse
//! - Regex corrections with bounded fixed-point repetition
//! - Best-effort inverse of the correction layer (revert)

mod engine;
mod error;
mod scan;

pub use engine::{convert, revert};
pub use error::{ConvertError, ConvertResult};

/// Iteration cap for repeating correction passes. Exceeding it means a
/// pattern keeps rewriting its own output, which is an authoring bug.
pub const MAX_REGEX_ITERATIONS: usize = 100;
