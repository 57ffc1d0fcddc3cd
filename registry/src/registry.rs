//! The ScriptRegistry - script name to compiled rule set.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use scriptcon_core::RuleSet;

use crate::{RegistryError, RegistryResult};

/// Process-wide map from script name to its compiled rule set.
///
/// Registration happens once per script during initialization;
/// re-registering a name replaces the prior rule set atomically. Resolved
/// rule sets are shared behind `Arc`, so a replacement never invalidates
/// a conversion already running against the old set.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: RwLock<HashMap<String, Arc<RuleSet>>>,
}

impl ScriptRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compiled rule set under its script name, replacing any
    /// prior entry wholesale.
    pub fn register(&self, rules: RuleSet) {
        let name = rules.name().to_string();
        self.scripts.write().insert(name, Arc::new(rules));
    }

    /// Resolve a script name to its rule set.
    pub fn resolve(&self, name: &str) -> RegistryResult<Arc<RuleSet>> {
        self.scripts
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::unknown_script(name))
    }

    /// Registered script names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scripts.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered scripts.
    pub fn len(&self) -> usize {
        self.scripts.read().len()
    }

    /// Whether no script is registered.
    pub fn is_empty(&self) -> bool {
        self.scripts.read().is_empty()
    }
}
