//! Main compiler implementation.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use scriptcon_core::{
    codepoint_len, match_form, DictEntry, DictPass, Pass, RegexPass, RuleSet, UndoRule,
};
use scriptcon_table::{Block, ScriptTable};

use crate::{CompileError, CompileResult};

/// Compile one script's ordered block list into a RuleSet.
pub fn compile(name: impl Into<String>, blocks: &[Block]) -> CompileResult<RuleSet> {
    let name = name.into();
    let mut passes = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        match block {
            Block::Literal {
                reverse,
                decomposed,
                caps_insensitive,
                mapping,
            } => {
                compile_literal(
                    index,
                    *reverse,
                    *decomposed,
                    *caps_insensitive,
                    mapping,
                    &mut passes,
                )?;
            }
            Block::Regex {
                pattern,
                replacement,
                undo_pattern,
                undo_replacement,
                repeat,
                decomposed,
            } => {
                passes.push(Pass::Regex(compile_regex(
                    index,
                    pattern,
                    replacement,
                    undo_pattern.as_deref(),
                    undo_replacement.as_deref(),
                    *repeat,
                    *decomposed,
                )?));
            }
        }
    }

    debug!(
        script = %name,
        blocks = blocks.len(),
        passes = passes.len(),
        "compiled rule set"
    );

    Ok(RuleSet::new(name, passes))
}

/// Compile every script in a loaded table document.
///
/// The first failing script aborts the whole compilation: a partially
/// compiled document must never reach the registry.
pub fn compile_document(table: &ScriptTable) -> CompileResult<Vec<RuleSet>> {
    table
        .iter()
        .map(|(name, blocks)| compile(name, blocks))
        .collect()
}

/// Split a literal block into one DictPass per distinct key length,
/// longest first.
fn compile_literal(
    block: usize,
    reverse: bool,
    decomposed: bool,
    caps_insensitive: bool,
    mapping: &IndexMap<String, String>,
    passes: &mut Vec<Pass>,
) -> CompileResult<()> {
    if mapping.is_empty() {
        return Err(CompileError::EmptyMapping { block });
    }

    // First pass: resolve keys to match form, tagging aliases by
    // first-seen value in authored order. If two keys collapse to the
    // same match form, the first-seen entry wins.
    let mut entries: IndexMap<String, DictEntry> = IndexMap::new();
    let mut seen_values: HashSet<&str> = HashSet::new();

    for (key, value) in mapping {
        if key.is_empty() {
            return Err(CompileError::EmptyKey { block });
        }
        let form = match_form(key, decomposed, caps_insensitive);
        let entry = if seen_values.insert(value.as_str()) {
            DictEntry::primary(value.as_str())
        } else {
            DictEntry::alias(value.as_str())
        };
        entries.entry(form).or_insert(entry);
    }

    // Second pass: partition by codepoint length, longest first. Lengths
    // with no keys are skipped rather than emitted empty.
    let lengths: BTreeSet<usize> = entries.keys().map(|k| codepoint_len(k)).collect();

    for &length in lengths.iter().rev() {
        let sub: IndexMap<String, DictEntry> = entries
            .iter()
            .filter(|(key, _)| codepoint_len(key) == length)
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect();

        passes.push(Pass::Dict(DictPass {
            block,
            length,
            reverse,
            decomposed,
            caps_insensitive,
            entries: sub,
        }));
    }

    Ok(())
}

/// Compile a regex block into a single RegexPass.
fn compile_regex(
    block: usize,
    pattern: &str,
    replacement: &str,
    undo_pattern: Option<&str>,
    undo_replacement: Option<&str>,
    repeat: bool,
    decomposed: bool,
) -> CompileResult<RegexPass> {
    let pattern = Regex::new(pattern).map_err(|e| CompileError::pattern(block, e))?;

    let undo = match (undo_pattern, undo_replacement) {
        (Some(undo_pattern), Some(undo_replacement)) => Some(UndoRule {
            pattern: Regex::new(undo_pattern).map_err(|e| CompileError::pattern(block, e))?,
            replacement: undo_replacement.to_string(),
        }),
        (None, None) => None,
        _ => return Err(CompileError::IncompleteUndo { block }),
    };

    Ok(RegexPass {
        pattern,
        replacement: replacement.to_string(),
        undo,
        repeat,
        decomposed,
    })
}
