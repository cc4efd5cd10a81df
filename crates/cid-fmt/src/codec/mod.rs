//! Binary and textual encoding/decoding for identifiers.

pub mod cid;
pub mod multibase;
pub mod primitives;

pub use cid::{BaseSelection, extract_base};
pub use multibase::Base;
pub use primitives::{Reader, Writer};
