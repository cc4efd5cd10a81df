//! Content identifier (CID) decoding, conversion and formatting.
//!
//! This crate decodes textual content identifiers, converts them between
//! versions, re-encodes them in any multibase, and renders them through a
//! small `%`-directive template language. It also lists the multibase
//! encodings, codecs and hash functions a [`Registry`] knows about.
//!
//! # Quick Start
//!
//! ```rust
//! use cid_fmt::{format_cids, DefaultRegistry, FormatOptions};
//!
//! let options = FormatOptions::from_flags(Some("%s %h"), Some("1"), Some("base32")).unwrap();
//! let results = format_cids(
//!     ["QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n", "not-a-cid"],
//!     &options,
//!     &DefaultRegistry,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     results[0].formatted(),
//!     "bafybeihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku sha2-256"
//! );
//! assert!(!results[1].is_ok());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Identifier, version and multihash types, version conversion
//! - [`codec`]: Varints, multibase text encodings, identifier wire format
//! - [`format`]: Template parsing and rendering
//! - [`batch`]: Per-item isolated batch formatting
//! - [`registry`]: Code/name tables and sorted listings
//! - [`import`]: Parameters and layout selection for the content importer
//! - [`error`]: Error types
//! - [`limits`]: Decode bounds and well-known codes
//!
//! # Wire Format
//!
//! - Version 0: base58btc of a sha2-256 multihash, no multibase marker
//! - Version 1: multibase marker + `varint(1) varint(codec) multihash`

pub mod batch;
pub mod codec;
pub mod error;
pub mod format;
pub mod import;
pub mod limits;
pub mod model;
pub mod registry;

// Re-export commonly used types at crate root
pub use batch::{DEFAULT_TEMPLATE, FormatOptions, FormatResult, format_cids, format_each, format_one};
pub use codec::{Base, BaseSelection, extract_base};
pub use error::{
    BaseError, ConversionError, DecodeError, ErrorCode, FormatError, ImportError, ItemError,
    RenderError,
};
pub use format::{Directive, Template, format_reference};
pub use import::{ContentImporter, ImportParams, Layout, import_stream};
pub use model::{Cid, Multihash, Version, VersionConversion};
pub use registry::{
    CodeAndName, DefaultRegistry, ListOptions, ListingRow, Registry, TableRegistry, list_codecs,
    list_hashes, list_multibases,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
