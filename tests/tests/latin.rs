//! Latin end-to-end conversion tests.
//!
//! The Latin table expands TeX-style escapes into the orthography's
//! special letters and macron vowels.

use scriptcon_tests::prelude::*;

fn latin() -> std::sync::Arc<RuleSet> {
    registry_from_fixture("scripts.json")
        .resolve("Latin")
        .unwrap()
}

#[test]
fn test_letter_escapes_expand() {
    let rules = latin();

    assert_eq!(convert(r"\aelm", &rules).unwrap(), "ælm");
    assert_eq!(convert(r"p\th", &rules).unwrap(), "pþ");
}

#[test]
fn test_macron_escapes_expand() {
    let rules = latin();

    assert_eq!(convert(r"\=atta", &rules).unwrap(), "\u{0101}tta");
}

#[test]
fn test_plain_text_is_untouched() {
    let rules = latin();

    assert_eq!(convert("lamwoi", &rules).unwrap(), "lamwoi");
}
