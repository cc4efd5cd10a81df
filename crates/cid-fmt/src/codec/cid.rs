//! Binary and textual serialization of identifiers.
//!
//! Binary layout:
//! - V0: the 34-byte sha2-256 multihash, nothing else.
//! - V1: `varint(1) varint(codec) varint(hash) varint(len) digest`.
//!
//! Text layout:
//! - V0: base58btc of the binary form, no marker (always 46 chars, `Qm...`).
//! - V1: one multibase marker followed by the encoded binary form.

use std::str::FromStr;

use crate::codec::multibase::Base;
use crate::codec::primitives::{Reader, Writer, varint_len};
use crate::error::DecodeError;
use crate::limits::{MAX_CID_TEXT_LEN, SHA2_256, SHA2_256_LEN, V0_TEXT_LEN, V0_TEXT_PREFIX};
use crate::model::{Cid, Multihash, Version};

/// Base used when printing an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseSelection {
    /// Reuse the base the input text was written in.
    #[default]
    Original,
    /// Print in this base.
    Explicit(Base),
}

impl BaseSelection {
    /// Resolves the selection against the base an input was decoded from.
    pub fn resolve(self, original: Base) -> Base {
        match self {
            BaseSelection::Original => original,
            BaseSelection::Explicit(base) => base,
        }
    }
}

impl From<Base> for BaseSelection {
    fn from(base: Base) -> Self {
        BaseSelection::Explicit(base)
    }
}

/// How an identifier's text is laid out.
enum TextForm {
    /// Marker-less base58btc.
    V0,
    /// Marker followed by the encoded binary form.
    Marked(Base),
}

fn text_form(text: &str) -> Result<TextForm, DecodeError> {
    if text.len() < 2 {
        return Err(DecodeError::TooShort { len: text.len() });
    }
    if text.len() == V0_TEXT_LEN && text.starts_with(V0_TEXT_PREFIX) {
        return Ok(TextForm::V0);
    }
    Base::from_marked(text).map(TextForm::Marked)
}

/// Returns the base a textual identifier is written in, without decoding it.
pub fn extract_base(text: &str) -> Result<Base, DecodeError> {
    Ok(match text_form(text)? {
        TextForm::V0 => Base::Base58Btc,
        TextForm::Marked(base) => base,
    })
}

impl Cid {
    /// The base this identifier prints in when nothing else is requested.
    pub fn default_base(&self) -> Base {
        match self.version {
            Version::V0 => Base::Base58Btc,
            Version::V1 => Base::Base32,
        }
    }

    /// Serialized length in bytes.
    pub fn encoded_len(&self) -> usize {
        match self.version {
            Version::V0 => self.hash.encoded_len(),
            Version::V1 => {
                varint_len(Version::V1.number()) + varint_len(self.codec) + self.hash.encoded_len()
            }
        }
    }

    /// Serializes to the binary layout for this identifier's version.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.encoded_len());
        if self.version == Version::V1 {
            writer.write_varint(Version::V1.number());
            writer.write_varint(self.codec);
        }
        self.hash.write(&mut writer);
        writer.into_bytes()
    }

    /// Parses the binary layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Cid, DecodeError> {
        if bytes.len() == 2 + SHA2_256_LEN && bytes[0] == SHA2_256 as u8 && bytes[1] == SHA2_256_LEN as u8 {
            let hash = Multihash::from_bytes(bytes)?;
            return Ok(Cid::new_v0_unchecked(hash));
        }

        let mut reader = Reader::new(bytes);
        let version = reader.read_varint("version")?;
        if Version::from_u64(version) != Some(Version::V1) {
            return Err(DecodeError::UnsupportedVersion { version });
        }
        let codec = reader.read_varint("codec")?;
        let hash = Multihash::read(&mut reader)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                count: reader.remaining_len(),
            });
        }
        Ok(Cid::new_v1(codec, hash))
    }

    /// Decodes a textual identifier.
    pub fn decode(text: &str) -> Result<Cid, DecodeError> {
        Self::decode_with_base(text).map(|(cid, _)| cid)
    }

    /// Decodes a textual identifier, also returning the base it was written in.
    pub fn decode_with_base(text: &str) -> Result<(Cid, Base), DecodeError> {
        if text.len() > MAX_CID_TEXT_LEN {
            return Err(DecodeError::TooLong {
                len: text.len(),
                max: MAX_CID_TEXT_LEN,
            });
        }

        match text_form(text)? {
            TextForm::V0 => {
                let bytes = Base::Base58Btc.decode(text)?;
                let hash = Multihash::from_bytes(&bytes)?;
                if !hash.is_v0_compatible() {
                    return Err(DecodeError::InvalidV0Multihash);
                }
                Ok((Cid::new_v0_unchecked(hash), Base::Base58Btc))
            }
            TextForm::Marked(base) => {
                let cid = Cid::from_bytes(&base.decode_marked(text)?)?;
                if cid.version == Version::V0 {
                    return Err(DecodeError::PrefixedV0);
                }
                Ok((cid, base))
            }
        }
    }

    /// Encodes to text in `base`.
    ///
    /// A version 0 identifier only has a marker-less form in base58btc; in
    /// any other base it is printed in its version 1 form.
    pub fn to_text(&self, base: Base) -> String {
        match self.version {
            Version::V0 if base == Base::Base58Btc => base.encode(&self.to_bytes()),
            Version::V0 => self.to_v1().to_text(base),
            Version::V1 => base.encode_prefixed(&self.to_bytes()),
        }
    }

    /// Encodes to text in `base` with any multibase marker stripped.
    pub fn to_text_unprefixed(&self, base: Base) -> String {
        match self.version {
            Version::V0 if base == Base::Base58Btc => base.encode(&self.to_bytes()),
            Version::V0 => self.to_v1().to_text_unprefixed(base),
            Version::V1 => base.encode(&self.to_bytes()),
        }
    }
}

impl FromStr for Cid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cid::decode(s)
    }
}
