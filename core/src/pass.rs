//! Compiled pass types.
//!
//! A pass is one ordered rewriting step in a rule set: either a literal
//! substitution over fixed-length codepoint windows (`DictPass`) or a
//! regex correction (`RegexPass`).

use indexmap::IndexMap;
use regex::Regex;

/// One literal mapping entry.
#[derive(Debug, Clone)]
pub struct DictEntry {
    /// Target-side glyph sequence emitted on a match.
    pub value: String,
    /// True if an earlier key in the same block maps to the same value.
    /// Aliases behave identically during conversion; the tag records the
    /// non-injectivity for disambiguation workflows.
    pub alias: bool,
}

impl DictEntry {
    /// Create a primary entry.
    pub fn primary(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            alias: false,
        }
    }

    /// Create an alias entry.
    pub fn alias(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            alias: true,
        }
    }
}

/// A literal substitution pass over fixed-length codepoint windows.
///
/// Every lookup key in the pass has exactly `length` codepoints; the
/// compiler partitions a mapping block into one pass per distinct key
/// length, longest first.
#[derive(Debug, Clone)]
pub struct DictPass {
    /// Index of the originating literal block. Substituted output is
    /// opaque to later passes of the same block only.
    pub block: usize,
    /// Codepoint count of every lookup key in this pass.
    pub length: usize,
    /// Scan right-to-left, giving rightmost-anchored grouping.
    pub reverse: bool,
    /// Match on the canonical decomposition (NFD) of the text.
    pub decomposed: bool,
    /// Case-fold before lookup.
    pub caps_insensitive: bool,
    /// Lookup key (match form) to entry, in authored order.
    pub entries: IndexMap<String, DictEntry>,
}

impl DictPass {
    /// Look up the mapped value for a window already in match form.
    pub fn lookup(&self, window: &str) -> Option<&str> {
        self.entries.get(window).map(|e| e.value.as_str())
    }

    /// Whether the given lookup key is an alias.
    pub fn is_alias(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.alias)
    }

    /// Number of entries in this pass.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this pass has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The declared inverse of a regex correction.
#[derive(Debug, Clone)]
pub struct UndoRule {
    /// Pattern matching the corrected form.
    pub pattern: Regex,
    /// Replacement reconstructing the pre-correction form.
    pub replacement: String,
}

/// A context-correction pass applied to the whole current text.
#[derive(Debug, Clone)]
pub struct RegexPass {
    /// Forward substitution pattern.
    pub pattern: Regex,
    /// Forward replacement; may reference capture groups with `$n`.
    pub replacement: String,
    /// Inverse substitution, if the correction is invertible.
    pub undo: Option<UndoRule>,
    /// Reapply until no further match rather than exactly once.
    pub repeat: bool,
    /// Substitute on the NFD form of the text.
    pub decomposed: bool,
}

/// One ordered rewriting step in a rule set.
#[derive(Debug, Clone)]
pub enum Pass {
    /// Literal longest-match substitution.
    Dict(DictPass),
    /// Regex correction.
    Regex(RegexPass),
}

impl Pass {
    /// Returns true if this is a literal substitution pass.
    pub fn is_dict(&self) -> bool {
        matches!(self, Pass::Dict(_))
    }

    /// Returns true if this is a regex correction pass.
    pub fn is_regex(&self) -> bool {
        matches!(self, Pass::Regex(_))
    }

    /// Get as a dict pass if this is one.
    pub fn as_dict(&self) -> Option<&DictPass> {
        match self {
            Pass::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Get as a regex pass if this is one.
    pub fn as_regex(&self) -> Option<&RegexPass> {
        match self {
            Pass::Regex(r) => Some(r),
            _ => None,
        }
    }
}
