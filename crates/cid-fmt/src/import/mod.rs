//! Boundary to the content importer.
//!
//! Chunking a byte stream and building a DAG out of it is the importer's
//! business; this module only fixes the parameters it is called with,
//! validates them, and picks between the two DAG layouts.

use std::io::Read;

use crate::error::ImportError;
use crate::limits::{LEGACY_CODEC, SHA2_256, SHA2_256_LEN};
use crate::model::{Cid, Multihash, Version};
use crate::registry::Registry;

/// Default leaf size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 256 * 1024;

/// Default maximum number of links per interior node.
pub const DEFAULT_LINKS_PER_BLOCK: usize = 174;

/// DAG building strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Broad, shallow tree.
    #[default]
    Balanced,
    /// Deep tree optimised for sequential reads.
    Trickle,
}

impl Layout {
    /// Picks the layout for a `--trickle` style flag.
    pub fn select(trickle: bool) -> Layout {
        if trickle {
            Layout::Trickle
        } else {
            Layout::Balanced
        }
    }
}

/// Parameters handed to the importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportParams {
    /// Leaf size in bytes.
    pub chunk_size: usize,
    /// Maximum links per interior node.
    pub max_links: usize,
    /// Store leaves as raw blocks instead of wrapping them.
    pub raw_leaves: bool,
    /// Reference already-available bytes instead of copying them.
    pub no_copy: bool,
    /// Hash function for every block.
    pub hash_function: u64,
    /// Version of the resulting identifiers.
    pub cid_version: Version,
    /// Codec of interior nodes.
    pub codec: u64,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_links: DEFAULT_LINKS_PER_BLOCK,
            raw_leaves: false,
            no_copy: false,
            hash_function: SHA2_256,
            cid_version: Version::V0,
            codec: LEGACY_CODEC,
        }
    }
}

impl ImportParams {
    /// Parameters for adding remote content by reference: raw leaves, no
    /// local copy, version 1 identifiers.
    pub fn url_store() -> Self {
        Self {
            raw_leaves: true,
            no_copy: true,
            cid_version: Version::V1,
            ..Self::default()
        }
    }

    /// Checks the parameters against `registry`.
    pub fn validate<R: Registry + ?Sized>(&self, registry: &R) -> Result<(), ImportError> {
        if self.chunk_size == 0 {
            return Err(ImportError::ZeroParameter { field: "chunk_size" });
        }
        if self.max_links == 0 {
            return Err(ImportError::ZeroParameter { field: "max_links" });
        }
        if !registry.is_acceptable_hash(self.hash_function) {
            return Err(ImportError::UnacceptableHash {
                code: self.hash_function,
            });
        }
        if self.cid_version == Version::V0 {
            // Same legality rule as converting an existing identifier.
            let digest = vec![0u8; SHA2_256_LEN];
            let candidate = Cid::new_v1(self.codec, Multihash::from_parts(self.hash_function, digest));
            candidate.to_v0()?;
        }
        Ok(())
    }
}

/// Builds a DAG from a byte stream and returns its root identifier.
pub trait ContentImporter {
    fn import(
        &mut self,
        source: &mut dyn Read,
        layout: Layout,
        params: &ImportParams,
    ) -> Result<Cid, ImportError>;
}

/// Validates `params` and imports `source` with the selected layout.
pub fn import_stream<I, R>(
    importer: &mut I,
    registry: &R,
    source: &mut dyn Read,
    trickle: bool,
    params: &ImportParams,
) -> Result<Cid, ImportError>
where
    I: ContentImporter + ?Sized,
    R: Registry + ?Sized,
{
    params.validate(registry)?;
    let layout = Layout::select(trickle);
    tracing::debug!(
        ?layout,
        chunk_size = params.chunk_size,
        raw_leaves = params.raw_leaves,
        "importing stream"
    );
    importer.import(source, layout, params)
}
