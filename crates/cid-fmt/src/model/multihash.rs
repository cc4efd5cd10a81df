//! Multihash values: a hash-function tag plus the digest it produced.

use sha2::{Digest, Sha256};

use crate::codec::primitives::{Reader, Writer, varint_len};
use crate::error::DecodeError;
use crate::limits::{MAX_DIGEST_LEN, SHA2_256, SHA2_256_LEN};

/// A hash-function code and digest bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Wraps an existing digest.
    ///
    /// Fails if the digest is longer than [`MAX_DIGEST_LEN`], the longest
    /// digest decoding accepts.
    pub fn new(code: u64, digest: impl Into<Vec<u8>>) -> Result<Self, DecodeError> {
        let digest = digest.into();
        if digest.len() > MAX_DIGEST_LEN {
            return Err(DecodeError::DigestTooLong {
                len: digest.len() as u64,
                max: MAX_DIGEST_LEN,
            });
        }
        Ok(Self::from_parts(code, digest))
    }

    /// Wraps a digest already known to be within bounds.
    pub(crate) fn from_parts(code: u64, digest: Vec<u8>) -> Self {
        Self { code, digest }
    }

    /// Hashes `data` with sha2-256.
    pub fn sha2_256(data: &[u8]) -> Self {
        Self::from_parts(SHA2_256, Sha256::digest(data).to_vec())
    }

    /// Hash-function code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Whether this is the 32-byte sha2-256 multihash a version 0 identifier requires.
    pub fn is_v0_compatible(&self) -> bool {
        self.code == SHA2_256 && self.digest.len() == SHA2_256_LEN
    }

    /// Serialized length in bytes.
    pub fn encoded_len(&self) -> usize {
        varint_len(self.code) + varint_len(self.digest.len() as u64) + self.digest.len()
    }

    /// Serializes as `varint(code) varint(len) digest`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.encoded_len());
        self.write(&mut writer);
        writer.into_bytes()
    }

    pub(crate) fn write(&self, writer: &mut Writer) {
        writer.write_varint(self.code);
        writer.write_varint(self.digest.len() as u64);
        writer.write_bytes(&self.digest);
    }

    /// Parses a multihash that must occupy all of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(bytes);
        let mh = Self::read(&mut reader)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                count: reader.remaining_len(),
            });
        }
        Ok(mh)
    }

    pub(crate) fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let code = reader.read_varint("hash code")?;
        let declared = reader.read_varint("digest length")?;
        if declared > MAX_DIGEST_LEN as u64 {
            return Err(DecodeError::DigestTooLong {
                len: declared,
                max: MAX_DIGEST_LEN,
            });
        }
        let available = reader.remaining_len();
        if declared as usize > available {
            return Err(DecodeError::DigestLengthMismatch {
                declared,
                actual: available,
            });
        }
        let digest = reader.read_bytes(declared as usize, "digest")?;
        Ok(Self::from_parts(code, digest.to_vec()))
    }
}
