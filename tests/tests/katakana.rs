//! Katakana end-to-end conversion tests.
//!
//! The Katakana table chains three literal blocks (macron expansion,
//! reverse doubled-vowel contraction, main syllabary) with vowel-merge
//! and consonant-merge corrections between and after them.

use scriptcon_tests::prelude::*;

fn katakana() -> std::sync::Arc<RuleSet> {
    registry_from_fixture("scripts.json")
        .resolve("Katakana")
        .unwrap()
}

#[test]
fn test_syllables_and_final_consonants() {
    let rules = katakana();

    assert_eq!(convert("kani", &rules).unwrap(), "カニ");
    assert_eq!(convert("rak", &rules).unwrap(), "ラㇰ");
}

#[test]
fn test_macron_vowel_becomes_long_vowel_mark() {
    // GIVEN a long vowel written with a macron
    let rules = katakana();

    // WHEN it is expanded, contracted and converted
    let result = convert("kāne", &rules).unwrap();

    // THEN the chain ā → aa → aー → カー holds: a later block re-scans
    // what an earlier block substituted
    assert_eq!(result, "カーネ");
}

#[test]
fn test_case_insensitive_blocks_fold_input() {
    let rules = katakana();

    assert_eq!(convert("KĀNE", &rules).unwrap(), "カーネ");
}

#[test]
fn test_doubled_vowel_contracts() {
    let rules = katakana();

    assert_eq!(convert("kaa", &rules).unwrap(), "カー");
}

#[test]
fn test_vowel_runs_group_from_the_right() {
    // GIVEN three vowels after a consonant
    let rules = katakana();

    // WHEN
    let result = convert("kaaa", &rules).unwrap();

    // THEN the reverse scan claims the trailing pair: ka-aa, not ka-a-a
    assert_eq!(result, "カアー");
}

#[test]
fn test_apostrophe_separates_vowels_across_a_long_mark() {
    let rules = katakana();

    // kā'a: the merge correction folds aー'a into aーa before the
    // syllabary block runs.
    assert_eq!(convert("kā'a", &rules).unwrap(), "カーア");
}

#[test]
fn test_apostrophe_splits_consonant_vowel_sequences() {
    let rules = katakana();

    // GIVEN the two readings of "n i"
    let split = convert("kan'i", &rules).unwrap();
    let syllable = convert("kani", &rules).unwrap();

    // THEN n'i is a final nasal plus a bare vowel, ni is one syllable
    assert_eq!(split, "カンイ");
    assert_eq!(syllable, "カニ");
}

#[test]
fn test_merged_forms_collapse_and_revert_reconstructs_them() {
    let rules = katakana();

    // GIVEN two spellings that convert to the same glyphs
    assert_eq!(convert("tan'ga", &rules).unwrap(), "タンガ");
    assert_eq!(convert("tanga", &rules).unwrap(), "タンガ");

    // WHEN the merged output is reverted
    let reverted = revert("タンガ", &rules).unwrap();

    // THEN the undo layer reintroduces the apostrophe reading
    assert_eq!(reverted, "タン'ガ");
}

#[test]
fn test_revert_round_trips_the_consonant_correction() {
    let rules = katakana();

    let converted = convert("kan'i", &rules).unwrap();

    assert_eq!(revert(&converted, &rules).unwrap(), "カン'イ");
}

#[test]
fn test_punctuation_maps_to_fullwidth_forms() {
    let rules = katakana();

    assert_eq!(convert("na!", &rules).unwrap(), "ナ！");
    assert_eq!(convert("mere to", &rules).unwrap(), "メレ・ト");
}
