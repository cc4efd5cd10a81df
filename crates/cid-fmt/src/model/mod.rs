//! Data model types for content identifiers.
//!
//! This module contains:
//! - Multihashes (hash-function tag + digest)
//! - Identifiers and their versions
//! - Version conversion

pub mod cid;
pub mod multihash;
pub mod version;

pub use cid::{Cid, Version};
pub use multihash::Multihash;
pub use version::VersionConversion;
