//! Error types for identifier decoding, conversion, formatting and listing.

use thiserror::Error;

/// Error codes for the failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Malformed identifier (bad marker, bad bytes, truncated digest)
    MalformedIdentifier,
    /// E002: Illegal version conversion
    UnsupportedConversion,
    /// E003: Structural template error
    BadFormatString,
    /// E004: Unknown multibase or version in a request
    UnknownBase,
    /// E005: Directive could not be resolved for one identifier
    RenderFailed,
    /// E006: Importer parameters rejected or importer failed
    ImportFailed,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedIdentifier => "E001",
            ErrorCode::UnsupportedConversion => "E002",
            ErrorCode::BadFormatString => "E003",
            ErrorCode::UnknownBase => "E004",
            ErrorCode::RenderFailed => "E005",
            ErrorCode::ImportFailed => "E006",
        }
    }
}

/// Error while decoding an identifier from text or bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[E001] identifier too short: {len} characters")]
    TooShort { len: usize },

    #[error("[E001] identifier length {len} exceeds maximum {max}")]
    TooLong { len: usize, max: usize },

    #[error("[E001] unknown multibase prefix {prefix:?}")]
    UnknownPrefix { prefix: char },

    #[error("[E001] invalid {base} data")]
    InvalidBaseData { base: &'static str },

    #[error("[E001] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("[E001] varint exceeds maximum length (9 bytes)")]
    VarintTooLong,

    #[error("[E001] varint is not minimally encoded")]
    VarintNotMinimal,

    #[error("[E001] unsupported identifier version: {version}")]
    UnsupportedVersion { version: u64 },

    #[error("[E001] digest length {declared} does not match {actual} available bytes")]
    DigestLengthMismatch { declared: u64, actual: usize },

    #[error("[E001] digest length {len} exceeds maximum {max}")]
    DigestTooLong { len: u64, max: usize },

    #[error("[E001] {count} trailing bytes after multihash")]
    TrailingBytes { count: usize },

    #[error("[E001] version 0 identifier must be a sha2-256 multihash")]
    InvalidV0Multihash,

    #[error("[E001] version 0 identifier cannot carry a multibase prefix")]
    PrefixedV0,
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::MalformedIdentifier
    }
}

/// Error during version conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("[E002] can't convert codec 0x{codec:x} to cidv0: only dag-pb is supported")]
    UnsupportedCodecForV0 { codec: u64 },

    #[error("[E002] can't convert hash 0x{hash:x} with {len}-byte digest to cidv0: only sha2-256 is supported")]
    UnsupportedHashForV0 { hash: u64, len: usize },
}

impl ConversionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::UnsupportedConversion
    }
}

/// Structural template error. Depends only on the template text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("[E003] invalid format string {template:?}: no directives")]
    NoDirectives { template: String },

    #[error("[E003] invalid format string: unknown directive %{directive} at offset {offset}")]
    UnknownDirective { directive: char, offset: usize },

    #[error("[E003] invalid format string: unterminated % at end of template")]
    Unterminated,
}

impl FormatError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::BadFormatString
    }
}

/// Error while resolving a base or version request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    #[error("[E004] unknown multibase: {name:?}")]
    UnknownBase { name: String },

    #[error("[E004] multibase {name} cannot be used for textual output")]
    NotTextual { name: String },

    #[error("[E004] invalid cid version: {version:?}")]
    InvalidVersion { version: String },
}

impl BaseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::UnknownBase
    }
}

/// Per-identifier failure while rendering a directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("[E005] codec 0x{code:x} has no registered name")]
    UnknownCodecName { code: u64 },

    #[error("[E005] hash function 0x{code:x} has no registered name")]
    UnknownHashName { code: u64 },
}

impl RenderError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::RenderFailed
    }
}

/// Error raised at the content importer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("[E006] {field} must be greater than zero")]
    ZeroParameter { field: &'static str },

    #[error("[E006] hash function 0x{code:x} is not acceptable")]
    UnacceptableHash { code: u64 },

    #[error("[E006] {0}")]
    Conversion(#[from] ConversionError),

    #[error("[E006] import failed: {0}")]
    Importer(String),
}

impl ImportError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ImportFailed
    }
}

/// Failure attached to a single batch item.
///
/// These never abort sibling items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Convert(#[from] ConversionError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ItemError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ItemError::Decode(e) => e.code(),
            ItemError::Convert(e) => e.code(),
            ItemError::Render(e) => e.code(),
        }
    }
}
