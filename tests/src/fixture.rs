//! Fixture loading helpers.

use std::path::PathBuf;

use scriptcon_compiler::compile_document;
use scriptcon_registry::ScriptRegistry;
use scriptcon_table::ScriptTable;

/// Path of a fixture document under `fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Load and parse a fixture document.
pub fn load_fixture(name: &str) -> ScriptTable {
    let path = fixture_path(name);
    ScriptTable::from_path(&path)
        .unwrap_or_else(|e| panic!("failed to load fixture {}: {e}", path.display()))
}

/// Compile a fixture document and register every script it defines.
pub fn registry_from_fixture(name: &str) -> ScriptRegistry {
    let table = load_fixture(name);
    let rule_sets = compile_document(&table)
        .unwrap_or_else(|e| panic!("failed to compile fixture {name}: {e}"));

    let registry = ScriptRegistry::new();
    for rules in rule_sets {
        registry.register(rules);
    }
    registry
}
