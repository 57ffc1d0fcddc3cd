//! Unicode text helpers.
//!
//! Matching is defined over codepoints, not bytes. Decomposed passes
//! compare canonical-decomposition (NFD) forms so that a precomposed
//! accented vowel and its base + combining-mark spelling are the same key.

use unicode_normalization::UnicodeNormalization;

/// Canonical decomposition (NFD) of a string.
pub fn decompose(s: &str) -> String {
    s.nfd().collect()
}

/// Case fold for caps-insensitive lookup.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Number of codepoints in a string.
pub fn codepoint_len(s: &str) -> usize {
    s.chars().count()
}

/// The lookup form of a key under the given pass flags: NFD when
/// `decomposed`, then lowercased when `caps_insensitive`.
pub fn match_form(s: &str, decomposed: bool, caps_insensitive: bool) -> String {
    let s = if decomposed {
        decompose(s)
    } else {
        s.to_string()
    };
    if caps_insensitive {
        fold_case(&s)
    } else {
        s
    }
}
