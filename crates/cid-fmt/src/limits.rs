//! Decode bounds for untrusted identifier input.

/// Maximum encoded length of an unsigned varint (63-bit values).
pub const MAX_VARINT_BYTES: usize = 9;

/// Maximum digest length accepted in a multihash.
pub const MAX_DIGEST_LEN: usize = 1024;

/// Maximum length of an identifier's binary form: the version byte, three
/// varints (codec, hash code, digest length) and the digest.
pub const MAX_CID_BYTES: usize = 1 + 3 * MAX_VARINT_BYTES + MAX_DIGEST_LEN;

/// Maximum length of an identifier's textual form. Base2 is the widest
/// encoding at eight characters per byte, plus the marker.
pub const MAX_CID_TEXT_LEN: usize = MAX_CID_BYTES * 8 + 1;

/// Multihash code of sha2-256.
pub const SHA2_256: u64 = 0x12;

/// Digest length of sha2-256.
pub const SHA2_256_LEN: usize = 32;

/// Legacy codec implied by every version 0 identifier (dag-pb).
pub const LEGACY_CODEC: u64 = 0x70;

/// Raw binary codec.
pub const RAW_CODEC: u64 = 0x55;

/// Length of a version 0 identifier's text (base58btc, no marker).
pub const V0_TEXT_LEN: usize = 46;

/// Leading characters of every version 0 identifier's text.
pub const V0_TEXT_PREFIX: &str = "Qm";
