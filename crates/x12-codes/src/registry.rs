//! Code set registry keyed by set name

use crate::lookup::{CodeEntry, CodeSet};
use crate::tables;
use crate::{CodeError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

static REGISTRY: LazyLock<CodeSetRegistry> =
    LazyLock::new(|| CodeSetRegistry::from_sets(tables::all()));

/// The registry of every shipped code set
pub fn registry() -> &'static CodeSetRegistry {
    &REGISTRY
}

/// Registry for looking up code sets by name
///
/// Names are matched ignoring case, with `-`, `_` and `/` treated as spaces,
/// so `"action-code"` and `"Action Code"` address the same set.
#[derive(Debug, Default)]
pub struct CodeSetRegistry {
    sets: Vec<&'static CodeSet>,
    by_key: HashMap<String, usize>,
}

impl CodeSetRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the given sets
    #[must_use]
    pub fn from_sets(sets: impl IntoIterator<Item = &'static CodeSet>) -> Self {
        let mut registry = Self::new();
        for set in sets {
            registry.register(set);
        }
        registry
    }

    /// Register a code set under its name
    pub fn register(&mut self, set: &'static CodeSet) {
        let key = registry_key(set.name());
        if let Some(&index) = self.by_key.get(&key) {
            self.sets[index] = set;
        } else {
            self.by_key.insert(key, self.sets.len());
            self.sets.push(set);
        }
    }

    /// Get a code set by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static CodeSet> {
        self.by_key
            .get(&registry_key(name))
            .map(|&index| self.sets[index])
    }

    /// Resolve input against a named code set
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::UnknownCodeSet`] when no set has that name, or the
    /// error from [`CodeSet::resolve`].
    pub fn resolve(&self, set_name: &str, input: &str) -> Result<&'static CodeEntry> {
        let set = self
            .get(set_name)
            .ok_or_else(|| CodeError::UnknownCodeSet(set_name.to_string()))?;
        set.resolve(input)
    }

    /// All registered sets in registration order
    #[must_use]
    pub fn sets(&self) -> &[&'static CodeSet] {
        &self.sets
    }

    /// List all registered code set names
    #[must_use]
    pub fn list_names(&self) -> Vec<&'static str> {
        self.sets.iter().map(|set| set.name()).collect()
    }

    /// Number of registered sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

fn registry_key(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || matches!(c, '-' | '_' | '/'))
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
