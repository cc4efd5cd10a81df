//! Registries of multibase encodings, codecs and hash functions.
//!
//! The engine only ever reads these tables. [`Registry`] is the capability
//! every formatting and listing operation takes, so callers can substitute a
//! small synthetic [`TableRegistry`] for the built-in [`DefaultRegistry`].

pub mod listing;
pub mod tables;

use rustc_hash::FxHashSet;

pub use listing::{ListOptions, ListingRow, SortOrder, list_codecs, list_hashes, list_multibases};
pub use tables::DefaultRegistry;

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeAndName {
    pub code: u64,
    pub name: String,
}

impl CodeAndName {
    pub fn new(code: u64, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

/// Read-only access to the code/name tables.
pub trait Registry {
    /// Multibase encodings; the code is the marker's code point.
    fn multibases(&self) -> &[CodeAndName];

    /// Content-type codecs.
    fn codecs(&self) -> &[CodeAndName];

    /// Hash functions.
    fn hashes(&self) -> &[CodeAndName];

    /// Whether a hash function is considered cryptographically acceptable.
    fn is_acceptable_hash(&self, code: u64) -> bool;

    /// Name of a codec, if registered.
    fn codec_name(&self, code: u64) -> Option<&str> {
        find_name(self.codecs(), code)
    }

    /// Name of a hash function, if registered.
    fn hash_name(&self, code: u64) -> Option<&str> {
        find_name(self.hashes(), code)
    }
}

fn find_name(entries: &[CodeAndName], code: u64) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.name.as_str())
}

/// A registry built from caller-supplied tables.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    multibases: Vec<CodeAndName>,
    codecs: Vec<CodeAndName>,
    hashes: Vec<CodeAndName>,
    acceptable: FxHashSet<u64>,
}

impl TableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multibase(mut self, code: u64, name: impl Into<String>) -> Self {
        self.multibases.push(CodeAndName::new(code, name));
        self
    }

    pub fn with_codec(mut self, code: u64, name: impl Into<String>) -> Self {
        self.codecs.push(CodeAndName::new(code, name));
        self
    }

    /// Adds a hash function and whether it is acceptable.
    pub fn with_hash(mut self, code: u64, name: impl Into<String>, acceptable: bool) -> Self {
        self.hashes.push(CodeAndName::new(code, name));
        if acceptable {
            self.acceptable.insert(code);
        }
        self
    }
}

impl Registry for TableRegistry {
    fn multibases(&self) -> &[CodeAndName] {
        &self.multibases
    }

    fn codecs(&self) -> &[CodeAndName] {
        &self.codecs
    }

    fn hashes(&self) -> &[CodeAndName] {
        &self.hashes
    }

    fn is_acceptable_hash(&self, code: u64) -> bool {
        self.acceptable.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_registry_lookup() {
        let registry = TableRegistry::new()
            .with_codec(0x70, "dag-pb")
            .with_hash(0x12, "sha2-256", true)
            .with_hash(0x11, "sha1", false);

        assert_eq!(registry.codec_name(0x70), Some("dag-pb"));
        assert_eq!(registry.codec_name(0x55), None);
        assert_eq!(registry.hash_name(0x11), Some("sha1"));
        assert!(registry.is_acceptable_hash(0x12));
        assert!(!registry.is_acceptable_hash(0x11));
        assert!(registry.multibases().is_empty());
    }
}
