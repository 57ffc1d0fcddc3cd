//! Scriptcon Core Types
//!
//! This crate provides the foundational types used throughout the
//! scriptcon system:
//! - The compiled pass model (DictPass, RegexPass, Pass)
//! - The RuleSet container (ordered passes for one script)
//! - Unicode text helpers (decomposition, case folding, codepoint counts)

mod pass;
mod rule_set;
mod text;

pub use pass::*;
pub use rule_set::*;
pub use text::*;
