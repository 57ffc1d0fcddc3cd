//! Windowed literal substitution over the working text.
//!
//! The working text is a sequence of spans. A span is either open (still
//! subject to literal substitution) or sealed (output of an earlier match
//! in the same block). Dict passes scan open spans only; the descending
//! pass lengths within a block mean a shorter key can never split a span
//! a longer key already claimed.

use scriptcon_core::{decompose, fold_case, DictPass};

/// One run of working text.
#[derive(Debug)]
pub(crate) enum Span {
    /// Still convertible by literal passes.
    Open(String),
    /// Already substituted output, opaque within its originating block.
    Sealed(String),
}

/// Concatenate spans back into plain text.
pub(crate) fn merge(spans: Vec<Span>) -> String {
    let mut text = String::new();
    for span in spans {
        match span {
            Span::Open(s) | Span::Sealed(s) => text.push_str(&s),
        }
    }
    text
}

/// Apply one dict pass to the working text.
pub(crate) fn apply_dict(spans: Vec<Span>, pass: &DictPass) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Sealed(s) => out.push(Span::Sealed(s)),
            Span::Open(s) => scan_open(&s, pass, &mut out),
        }
    }
    out
}

/// Scan one open span, splitting matches off as sealed spans.
fn scan_open(text: &str, pass: &DictPass, out: &mut Vec<Span>) {
    // A decomposed pass matches against the NFD form of the span; the
    // unmatched residue is carried decomposed as well (re-decomposition
    // is idempotent, so later passes of the block see the same form).
    let chars: Vec<char> = if pass.decomposed {
        decompose(text).chars().collect()
    } else {
        text.chars().collect()
    };

    if pass.reverse {
        scan_reverse(&chars, pass, out);
    } else {
        scan_forward(&chars, pass, out);
    }
}

/// Look up the window, case-folding when the pass asks for it.
fn lookup<'p>(pass: &'p DictPass, window: &[char]) -> Option<&'p str> {
    let window: String = window.iter().collect();
    if pass.caps_insensitive {
        pass.lookup(&fold_case(&window))
    } else {
        pass.lookup(&window)
    }
}

/// Left-to-right scan: leftmost-anchored grouping.
fn scan_forward(chars: &[char], pass: &DictPass, out: &mut Vec<Span>) {
    let mut open = String::new();
    let mut i = 0;

    while i < chars.len() {
        if i + pass.length <= chars.len() {
            if let Some(value) = lookup(pass, &chars[i..i + pass.length]) {
                if !open.is_empty() {
                    out.push(Span::Open(std::mem::take(&mut open)));
                }
                out.push(Span::Sealed(value.to_string()));
                i += pass.length;
                continue;
            }
        }
        open.push(chars[i]);
        i += 1;
    }

    if !open.is_empty() {
        out.push(Span::Open(open));
    }
}

/// Right-to-left scan: rightmost-anchored grouping. Matches the window
/// ending at the cursor and prepends output, so a repeated-vowel run is
/// claimed from its tail.
fn scan_reverse(chars: &[char], pass: &DictPass, out: &mut Vec<Span>) {
    // Spans and open-run characters are collected back-to-front, then
    // reversed once at the end.
    let mut rev_spans: Vec<Span> = Vec::new();
    let mut rev_open: Vec<char> = Vec::new();
    let mut i = chars.len();

    while i > 0 {
        if i >= pass.length {
            if let Some(value) = lookup(pass, &chars[i - pass.length..i]) {
                if !rev_open.is_empty() {
                    rev_spans.push(Span::Open(rev_open.drain(..).rev().collect()));
                }
                rev_spans.push(Span::Sealed(value.to_string()));
                i -= pass.length;
                continue;
            }
        }
        rev_open.push(chars[i - 1]);
        i -= 1;
    }

    if !rev_open.is_empty() {
        rev_spans.push(Span::Open(rev_open.into_iter().rev().collect()));
    }

    rev_spans.reverse();
    out.extend(rev_spans);
}
