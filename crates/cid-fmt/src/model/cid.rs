//! The content identifier value.
//!
//! A [`Cid`] is encoding-agnostic: the multibase used to print it is a
//! presentation choice made at encode time (see [`crate::codec::cid`]), so
//! two identifiers with the same version, codec and multihash are equal no
//! matter which text they were decoded from.

use std::fmt;

use crate::limits::LEGACY_CODEC;
use crate::model::multihash::Multihash;

/// Identifier version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Version {
    V0 = 0,
    V1 = 1,
}

impl Version {
    /// Creates a Version from its numeric form.
    pub fn from_u64(v: u64) -> Option<Version> {
        match v {
            0 => Some(Version::V0),
            1 => Some(Version::V1),
            _ => None,
        }
    }

    /// Numeric form.
    pub fn number(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cidv{}", self.number())
    }
}

/// A decoded content identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cid {
    pub(crate) version: Version,
    pub(crate) codec: u64,
    pub(crate) hash: Multihash,
}

impl Cid {
    /// Creates a version 1 identifier.
    pub fn new_v1(codec: u64, hash: Multihash) -> Self {
        Self {
            version: Version::V1,
            codec,
            hash,
        }
    }

    /// Creates a version 0 identifier. The codec is implied.
    ///
    /// Callers wanting the sha2-256 check should go through
    /// [`Cid::to_v0`](crate::model::Cid::to_v0) instead.
    pub(crate) fn new_v0_unchecked(hash: Multihash) -> Self {
        Self {
            version: Version::V0,
            codec: LEGACY_CODEC,
            hash,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Content-type codec. Always the legacy codec for version 0.
    pub fn codec(&self) -> u64 {
        self.codec
    }

    pub fn hash(&self) -> &Multihash {
        &self.hash
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(self.default_base()))
    }
}
