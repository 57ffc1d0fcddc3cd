//! Conversion pipeline.

use regex::Regex;
use tracing::trace;

use scriptcon_core::{decompose, Pass, RuleSet};

use crate::scan::{apply_dict, merge, Span};
use crate::{ConvertError, ConvertResult, MAX_REGEX_ITERATIONS};

/// Convert text with the given rule set.
///
/// Total over well-formed input: unmatched codepoints pass through
/// unchanged. Errors signal rule-authoring defects only (a correction
/// pass that never settles, or a replacement referencing a capture group
/// its pattern does not have).
pub fn convert(text: &str, rules: &RuleSet) -> ConvertResult<String> {
    let mut spans = vec![Span::Open(text.to_string())];
    let mut current_block: Option<usize> = None;

    for (index, pass) in rules.passes().iter().enumerate() {
        match pass {
            Pass::Dict(dict) => {
                // Sealed output is opaque only within its originating
                // block; a pass from a new block re-scans the full text.
                if current_block != Some(dict.block) {
                    spans = vec![Span::Open(merge(spans))];
                    current_block = Some(dict.block);
                }
                spans = apply_dict(spans, dict);
                trace!(
                    script = rules.name(),
                    pass = index,
                    length = dict.length,
                    "applied dict pass"
                );
            }
            Pass::Regex(regex) => {
                // Corrections see, and may rewrite, substituted glyphs.
                current_block = None;
                let merged = merge(spans);
                let rewritten = apply_regex(
                    &merged,
                    &regex.pattern,
                    &regex.replacement,
                    regex.repeat,
                    regex.decomposed,
                )?;
                spans = vec![Span::Open(rewritten)];
                trace!(script = rules.name(), pass = index, "applied regex pass");
            }
        }
    }

    Ok(merge(spans))
}

/// Best-effort inverse: apply every regex pass's undo pair in reverse
/// pass order. Dict passes are skipped (literal substitution is lossy:
/// aliases collapse to their primary's value), as are corrections that
/// declare no inverse.
pub fn revert(text: &str, rules: &RuleSet) -> ConvertResult<String> {
    let mut text = text.to_string();

    for pass in rules.passes().iter().rev() {
        if let Pass::Regex(regex) = pass {
            if let Some(undo) = &regex.undo {
                text = apply_regex(
                    &text,
                    &undo.pattern,
                    &undo.replacement,
                    regex.repeat,
                    regex.decomposed,
                )?;
            }
        }
    }

    Ok(text)
}

/// Apply one substitution, repeating to a fixed point when asked.
fn apply_regex(
    text: &str,
    pattern: &Regex,
    replacement: &str,
    repeat: bool,
    decomposed: bool,
) -> ConvertResult<String> {
    validate_replacement(pattern, replacement)?;

    let mut text = if decomposed {
        decompose(text)
    } else {
        text.to_string()
    };

    if !repeat {
        return Ok(pattern.replace_all(&text, replacement).into_owned());
    }

    for _ in 0..MAX_REGEX_ITERATIONS {
        let rewritten = pattern.replace_all(&text, replacement).into_owned();
        if rewritten == text {
            return Ok(text);
        }
        text = rewritten;
    }

    Err(ConvertError::repeat_limit(
        pattern.as_str(),
        MAX_REGEX_ITERATIONS,
    ))
}

/// Check every `$n` / `${n}` reference in a replacement against the
/// pattern's capture groups.
fn validate_replacement(pattern: &Regex, replacement: &str) -> ConvertResult<()> {
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            continue;
        }
        // "$$" is a literal dollar sign.
        if chars.peek() == Some(&'$') {
            chars.next();
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if braced && c == '}' {
                chars.next();
                break;
            }
            if !braced && !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            name.push(c);
            chars.next();
        }

        if name.is_empty() {
            continue;
        }

        let valid = match name.parse::<usize>() {
            Ok(index) => index < pattern.captures_len(),
            // Not an index: a name starting with a digit can never be a
            // declared group, otherwise check the pattern's group names.
            Err(_) => {
                !name.starts_with(|c: char| c.is_ascii_digit())
                    && pattern.capture_names().flatten().any(|n| n == name)
            }
        };

        if !valid {
            return Err(ConvertError::invalid_capture_ref(pattern.as_str(), name));
        }
    }

    Ok(())
}
