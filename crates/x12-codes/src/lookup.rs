//! Code entry and fuzzy code set lookup

use crate::{CodeError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{trace, warn};

/// A single member of a code set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodeEntry {
    /// Code as transmitted in the segment element
    pub code: &'static str,
    /// Symbolic member name (e.g. `NO_ACKNOWLEDGMENT`)
    pub name: &'static str,
    /// Description from the X12 standard
    pub description: &'static str,
}

impl CodeEntry {
    /// Create a new code entry
    #[must_use]
    pub const fn new(code: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            code,
            name,
            description,
        }
    }
}

impl fmt::Display for CodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// A closed code set with its synonym table
///
/// All lookup maps are built by [`CodeSet::new`] and [`CodeSet::with_aliases`]
/// and never change afterwards, so a constructed set can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct CodeSet {
    name: &'static str,
    entries: Vec<CodeEntry>,
    by_code: HashMap<&'static str, usize>,
    by_folded_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    by_description: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
    alias_terms: Vec<(&'static str, usize)>,
    skipped_aliases: Vec<(&'static str, &'static str)>,
}

impl CodeSet {
    /// Create a code set from its entries
    ///
    /// Codes are expected to be unique. When two entries collide on a folded
    /// key the first one keeps it.
    #[must_use]
    pub fn new(name: &'static str, entries: &[CodeEntry]) -> Self {
        let mut set = Self {
            name,
            entries: entries.to_vec(),
            by_code: HashMap::with_capacity(entries.len()),
            by_folded_code: HashMap::with_capacity(entries.len()),
            by_name: HashMap::with_capacity(entries.len()),
            by_description: HashMap::with_capacity(entries.len()),
            aliases: HashMap::new(),
            alias_terms: Vec::new(),
            skipped_aliases: Vec::new(),
        };

        for (index, entry) in entries.iter().enumerate() {
            set.by_code.entry(entry.code).or_insert(index);
            set.by_folded_code.entry(fold(entry.code)).or_insert(index);
            set.by_name.entry(fold(entry.name)).or_insert(index);
            set.by_description.entry(fold(entry.description)).or_insert(index);
        }

        set
    }

    /// Attach synonyms as `(term, code)` pairs
    ///
    /// A term naming a code that is not in the set is skipped and recorded
    /// in [`CodeSet::skipped_aliases`].
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[(&'static str, &'static str)]) -> Self {
        for &(term, code) in aliases {
            let Some(&index) = self.by_code.get(code) else {
                warn!(code_set = self.name, term, code, "Alias targets unknown code");
                self.skipped_aliases.push((term, code));
                continue;
            };
            self.aliases.entry(fold(term)).or_insert(index);
            self.alias_terms.push((term, index));
        }
        self
    }

    /// Human-readable name of the set, used in error messages
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries in declaration order
    #[must_use]
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    /// Declared aliases with the entry each one resolves to
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &CodeEntry)> + '_ {
        self.alias_terms
            .iter()
            .map(|&(term, index)| (term, &self.entries[index]))
    }

    /// Aliases dropped at construction because their code is not in the set
    #[must_use]
    pub fn skipped_aliases(&self) -> &[(&'static str, &'static str)] {
        &self.skipped_aliases
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact code lookup, no normalization
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CodeEntry> {
        self.by_code.get(code).map(|&index| &self.entries[index])
    }

    /// Check if an input resolves to any entry
    #[must_use]
    pub fn contains(&self, input: &str) -> bool {
        self.resolve(input).is_ok()
    }

    /// Resolve free-form input to exactly one entry
    ///
    /// Rules are tried in order: exact code, code ignoring case, symbolic
    /// name, description, alias. Everything after the exact code match
    /// ignores case and interior whitespace runs.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidInput`] for blank input and
    /// [`CodeError::NotFound`] when no rule matches.
    pub fn resolve(&self, input: &str) -> Result<&CodeEntry> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CodeError::invalid_input(self.name));
        }

        if let Some(&index) = self.by_code.get(trimmed) {
            trace!(code_set = self.name, input, "Resolved by exact code");
            return Ok(&self.entries[index]);
        }

        let folded = fold(trimmed);
        let matched = [
            ("code", &self.by_folded_code),
            ("name", &self.by_name),
            ("description", &self.by_description),
            ("alias", &self.aliases),
        ]
        .into_iter()
        .find_map(|(rule, map)| map.get(&folded).map(|&index| (rule, index)));

        match matched {
            Some((rule, index)) => {
                trace!(code_set = self.name, input, rule, "Resolved code");
                Ok(&self.entries[index])
            }
            None => Err(CodeError::not_found(self.name, trimmed)),
        }
    }

    /// Resolve an optional input, treating `None` as blank input
    ///
    /// # Errors
    ///
    /// Same as [`CodeSet::resolve`].
    pub fn resolve_opt(&self, input: Option<&str>) -> Result<&CodeEntry> {
        input.map_or_else(
            || Err(CodeError::invalid_input(self.name)),
            |value| self.resolve(value),
        )
    }
}

/// Lowercase and collapse whitespace runs to single spaces
fn fold(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        if !folded.is_empty() {
            folded.push(' ');
        }
        folded.push_str(&word.to_lowercase());
    }
    folded
}
