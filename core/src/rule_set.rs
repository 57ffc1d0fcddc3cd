//! The RuleSet - an immutable ordered pass sequence for one script.

use crate::Pass;

/// The compiled rule set for one script.
///
/// Built once by the compiler and never mutated afterwards; safe to share
/// across concurrent conversions.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Script name (e.g. "Cyrillic", "Katakana").
    name: String,
    /// Ordered passes. Dict passes derived from one literal block are
    /// contiguous with strictly descending lengths.
    passes: Vec<Pass>,
}

impl RuleSet {
    /// Create a rule set (use the compiler for construction from blocks).
    pub fn new(name: impl Into<String>, passes: Vec<Pass>) -> Self {
        Self {
            name: name.into(),
            passes,
        }
    }

    /// The script this rule set converts to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered passes.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Whether the rule set has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}
