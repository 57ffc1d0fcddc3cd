//! Scriptcon Tests
//!
//! Integration test harness: loads fixture rule-table documents (JSON
//! modeled on the real conlang tables), compiles and registers them, and
//! drives end-to-end conversions.

mod fixture;

pub use fixture::{fixture_path, load_fixture, registry_from_fixture};

/// Everything an integration test needs.
pub mod prelude {
    pub use crate::{fixture_path, load_fixture, registry_from_fixture};
    pub use scriptcon_compiler::{compile, compile_document, CompileError};
    pub use scriptcon_core::{Pass, RuleSet};
    pub use scriptcon_engine::{convert, revert, ConvertError};
    pub use scriptcon_registry::{RegistryError, ScriptRegistry};
    pub use scriptcon_table::{Block, ScriptTable};
}
