//! Legality-checked conversion between identifier versions.

use crate::error::ConversionError;
use crate::limits::LEGACY_CODEC;
use crate::model::cid::{Cid, Version};

/// A requested version conversion, validated once at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionConversion {
    /// Leave the identifier's version alone.
    #[default]
    Keep,
    /// Downgrade to version 0 (dag-pb + sha2-256 only).
    ToV0,
    /// Upgrade to version 1.
    ToV1,
}

impl VersionConversion {
    /// Applies the conversion.
    pub fn apply(self, cid: Cid) -> Result<Cid, ConversionError> {
        match self {
            VersionConversion::Keep => Ok(cid),
            VersionConversion::ToV0 => cid.to_v0(),
            VersionConversion::ToV1 => Ok(cid.to_v1()),
        }
    }
}

impl Cid {
    /// Converts to version 0.
    ///
    /// Only dag-pb identifiers hashed with sha2-256 have a version 0 form;
    /// anything else would lose its codec tag or fail to decode again.
    pub fn to_v0(&self) -> Result<Cid, ConversionError> {
        if self.version == Version::V0 {
            return Ok(self.clone());
        }
        if self.codec != LEGACY_CODEC {
            return Err(ConversionError::UnsupportedCodecForV0 { codec: self.codec });
        }
        if !self.hash.is_v0_compatible() {
            return Err(ConversionError::UnsupportedHashForV0 {
                hash: self.hash.code(),
                len: self.hash.digest().len(),
            });
        }
        Ok(Cid::new_v0_unchecked(self.hash.clone()))
    }

    /// Converts to version 1. Never fails.
    pub fn to_v1(&self) -> Cid {
        Cid::new_v1(self.codec, self.hash.clone())
    }
}
