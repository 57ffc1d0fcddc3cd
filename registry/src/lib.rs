//! Scriptcon Registry
//!
//! Runtime rule-set lookup. Single source of truth for the compiled rule
//! set of every script the process can convert to. Entries are replaced
//! wholesale, never patched; a conversion already in flight keeps its
//! reference to the set it resolved.

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::ScriptRegistry;
