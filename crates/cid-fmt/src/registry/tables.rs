//! Built-in multibase, codec and hash-function tables.

use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::codec::Base;
use crate::registry::{CodeAndName, Registry};

/// Content-type codecs.
pub const CODECS: &[(u64, &str)] = &[
    (0x55, "raw"),
    (0x70, "dag-pb"),
    (0x71, "dag-cbor"),
    (0x72, "libp2p-key"),
    (0x78, "git-raw"),
    (0x90, "eth-block"),
    (0x91, "eth-block-list"),
    (0x92, "eth-tx-trie"),
    (0x93, "eth-tx"),
    (0x94, "eth-tx-receipt-trie"),
    (0x95, "eth-tx-receipt"),
    (0x96, "eth-state-trie"),
    (0x97, "eth-account-snapshot"),
    (0x98, "eth-storage-trie"),
    (0xb0, "bitcoin-block"),
    (0xb1, "bitcoin-tx"),
    (0xc0, "zcash-block"),
    (0xc1, "zcash-tx"),
    (0xe0, "decred-block"),
    (0xe1, "decred-tx"),
    (0xf0, "dash-block"),
    (0xf1, "dash-tx"),
    (0x0129, "dag-json"),
];

/// Hash functions.
pub const HASHES: &[(u64, &str)] = &[
    (0x00, "identity"),
    (0x11, "sha1"),
    (0x12, "sha2-256"),
    (0x13, "sha2-512"),
    (0x14, "sha3-512"),
    (0x15, "sha3-384"),
    (0x16, "sha3-256"),
    (0x17, "sha3-224"),
    (0x18, "shake-128"),
    (0x19, "shake-256"),
    (0x1a, "keccak-224"),
    (0x1b, "keccak-256"),
    (0x1c, "keccak-384"),
    (0x1d, "keccak-512"),
    (0x1e, "blake3"),
    (0x22, "murmur3-128"),
    (0x56, "dbl-sha2-256"),
    (0xd5, "md5"),
    (0xb220, "blake2b-256"),
    (0xb240, "blake2b-512"),
    (0xb260, "blake2s-256"),
    (0x1100, "x11"),
];

/// Hash functions considered cryptographically acceptable.
pub const ACCEPTABLE_HASHES: &[u64] = &[
    0x00, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x56, 0xb220,
    0xb240, 0xb260,
];

fn to_entries(pairs: &[(u64, &str)]) -> Vec<CodeAndName> {
    pairs
        .iter()
        .map(|&(code, name)| CodeAndName::new(code, name))
        .collect()
}

fn index(entries: &[CodeAndName]) -> FxHashMap<u64, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.code, i))
        .collect()
}

lazy_static! {
    static ref MULTIBASE_ENTRIES: Vec<CodeAndName> = {
        let mut entries = vec![CodeAndName::new(0x00, "identity")];
        entries.extend(Base::ALL.iter().map(|b| CodeAndName::new(b.code(), b.name())));
        entries
    };
    static ref CODEC_ENTRIES: Vec<CodeAndName> = to_entries(CODECS);
    static ref HASH_ENTRIES: Vec<CodeAndName> = to_entries(HASHES);
    static ref CODEC_INDEX: FxHashMap<u64, usize> = index(&CODEC_ENTRIES);
    static ref HASH_INDEX: FxHashMap<u64, usize> = index(&HASH_ENTRIES);
    static ref ACCEPTABLE: FxHashSet<u64> = ACCEPTABLE_HASHES.iter().copied().collect();
}

/// The built-in registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRegistry;

impl Registry for DefaultRegistry {
    fn multibases(&self) -> &[CodeAndName] {
        &MULTIBASE_ENTRIES
    }

    fn codecs(&self) -> &[CodeAndName] {
        &CODEC_ENTRIES
    }

    fn hashes(&self) -> &[CodeAndName] {
        &HASH_ENTRIES
    }

    fn is_acceptable_hash(&self, code: u64) -> bool {
        ACCEPTABLE.contains(&code)
    }

    fn codec_name(&self, code: u64) -> Option<&str> {
        CODEC_INDEX.get(&code).map(|&i| CODEC_ENTRIES[i].name.as_str())
    }

    fn hash_name(&self, code: u64) -> Option<&str> {
        HASH_INDEX.get(&code).map(|&i| HASH_ENTRIES[i].name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let registry = DefaultRegistry;
        for table in [registry.multibases(), registry.codecs(), registry.hashes()] {
            let codes: FxHashSet<u64> = table.iter().map(|e| e.code).collect();
            assert_eq!(codes.len(), table.len());
        }
    }

    #[test]
    fn test_name_lookup() {
        let registry = DefaultRegistry;
        assert_eq!(registry.codec_name(0x70), Some("dag-pb"));
        assert_eq!(registry.codec_name(0x0129), Some("dag-json"));
        assert_eq!(registry.hash_name(0x12), Some("sha2-256"));
        assert_eq!(registry.hash_name(0xb220), Some("blake2b-256"));
        assert_eq!(registry.codec_name(0xdead), None);
    }

    #[test]
    fn test_acceptable_hashes_are_registered() {
        let registry = DefaultRegistry;
        for code in ACCEPTABLE_HASHES {
            assert!(registry.hash_name(*code).is_some(), "0x{:x}", code);
        }
        assert!(registry.is_acceptable_hash(0x12));
        assert!(!registry.is_acceptable_hash(0x11));
        assert!(!registry.is_acceptable_hash(0xd5));
    }

    #[test]
    fn test_multibase_table_has_identity() {
        let registry = DefaultRegistry;
        assert_eq!(registry.multibases().len(), Base::ALL.len() + 1);
        assert!(registry.multibases().iter().any(|e| e.code == 0 && e.name == "identity"));
    }
}
