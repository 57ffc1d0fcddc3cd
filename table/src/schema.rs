//! Rule-table document schema.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TableResult;

fn default_repeat() -> bool {
    true
}

/// One authored block of a script's table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A literal phoneme-to-glyph mapping block.
    Literal {
        /// Scan right-to-left.
        #[serde(default)]
        reverse: bool,
        /// Match on canonical-decomposed text.
        #[serde(default)]
        decomposed: bool,
        /// Case-fold before lookup.
        #[serde(default)]
        caps_insensitive: bool,
        /// Source token to target glyph sequence, in authored order.
        /// Order determines primary/alias assignment downstream.
        mapping: IndexMap<String, String>,
    },
    /// A regex correction block.
    Regex {
        /// Forward substitution pattern.
        pattern: String,
        /// Forward replacement; capture groups referenced with `$n`.
        replacement: String,
        /// Inverse pattern; must be given together with
        /// `undo_replacement` or not at all.
        #[serde(default)]
        undo_pattern: Option<String>,
        /// Inverse replacement.
        #[serde(default)]
        undo_replacement: Option<String>,
        /// Reapply to a fixed point rather than exactly once.
        #[serde(default = "default_repeat")]
        repeat: bool,
        /// Substitute on the NFD form of the text.
        #[serde(default)]
        decomposed: bool,
    },
}

impl Block {
    /// Returns true if this is a literal mapping block.
    pub fn is_literal(&self) -> bool {
        matches!(self, Block::Literal { .. })
    }

    /// Returns true if this is a regex correction block.
    pub fn is_regex(&self) -> bool {
        matches!(self, Block::Regex { .. })
    }
}

/// A loaded rule-table document: script name to ordered block list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptTable {
    scripts: IndexMap<String, Vec<Block>>,
}

impl ScriptTable {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a reader.
    pub fn from_reader(reader: impl Read) -> TableResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a document from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Get the block list for a script.
    pub fn get(&self, name: &str) -> Option<&[Block]> {
        self.scripts.get(name).map(Vec::as_slice)
    }

    /// Iterate scripts in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Block])> {
        self.scripts
            .iter()
            .map(|(name, blocks)| (name.as_str(), blocks.as_slice()))
    }

    /// Number of scripts in the document.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Whether the document has no scripts.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}
