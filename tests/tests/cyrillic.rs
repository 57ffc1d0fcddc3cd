//! Cyrillic end-to-end conversion tests.
//!
//! The Cyrillic table is a single decomposed literal block (digraphs plus
//! single letters, upper and lower case) followed by two apostrophe
//! corrections with declared inverses.

use scriptcon_tests::prelude::*;

fn cyrillic() -> std::sync::Arc<RuleSet> {
    registry_from_fixture("scripts.json")
        .resolve("Cyrillic")
        .unwrap()
}

#[test]
fn test_digraphs_win_over_single_letters() {
    let rules = cyrillic();

    // pf and ts are claimed by the two-length pass before p/f/t/s run.
    assert_eq!(convert("pfitsa", &rules).unwrap(), "ԥица");
    assert_eq!(convert("kxit", &rules).unwrap(), "қит");
}

#[test]
fn test_case_pairs_map_to_cased_glyphs() {
    let rules = cyrillic();

    assert_eq!(convert("Pfitsa", &rules).unwrap(), "Ԥица");
    assert_eq!(convert("Ngawi", &rules).unwrap(), "Ҥаўи");
}

#[test]
fn test_alias_spellings_convert_like_their_primary() {
    let rules = cyrillic();

    // tS is an alias of ts; both collapse to the same glyph.
    assert_eq!(convert("tsa", &rules).unwrap(), "ца");
    assert_eq!(convert("tSa", &rules).unwrap(), "ца");
}

#[test]
fn test_apostrophe_splits_the_ng_digraph() {
    let rules = cyrillic();

    // GIVEN the two readings of "n g"
    let merged = convert("tan'ga", &rules).unwrap();
    let digraph = convert("tanga", &rules).unwrap();

    // THEN n'g converts letter by letter and drops its apostrophe, while
    // ng is the velar nasal digraph
    assert_eq!(merged, "танга");
    assert_eq!(digraph, "таҥа");
}

#[test]
fn test_revert_reconstructs_the_apostrophe() {
    let rules = cyrillic();

    assert_eq!(revert("танга", &rules).unwrap(), "тан'га");
}

#[test]
fn test_macron_survives_as_combining_mark() {
    let rules = cyrillic();

    // GIVEN a long vowel written with a precomposed a-macron
    let result = convert("t\u{0101}", &rules).unwrap();

    // THEN the decomposed block converts the base letter and passes the
    // combining macron through
    assert_eq!(result, "та\u{0304}");
}

#[test]
fn test_decomposed_input_converts_identically() {
    let rules = cyrillic();

    let precomposed = convert("t\u{0101}", &rules).unwrap();
    let decomposed = convert("ta\u{0304}", &rules).unwrap();

    assert_eq!(precomposed, decomposed);
}

#[test]
fn test_ash_and_w_have_dedicated_glyphs() {
    let rules = cyrillic();

    assert_eq!(convert("æw", &rules).unwrap(), "ӕў");
}

#[test]
fn test_unmapped_punctuation_passes_through() {
    let rules = cyrillic();

    assert_eq!(convert("ta, ta!", &rules).unwrap(), "та, та!");
}
