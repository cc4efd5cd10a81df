//! Multibase text encodings.
//!
//! Each [`Base`] is selected by a one-character marker that prefixes the
//! encoded text. The identity encoding (marker `0x00`) is registered for
//! listing purposes but is not a textual base and has no variant here.

use std::fmt;
use std::str::FromStr;

use data_encoding::{
    BASE32, BASE32_NOPAD, BASE32HEX, BASE32HEX_NOPAD, BASE64, BASE64_NOPAD, BASE64URL,
    BASE64URL_NOPAD, Encoding, HEXLOWER, HEXUPPER, Specification,
};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::error::{BaseError, DecodeError};

lazy_static! {
    static ref BASE2: Encoding = encoding("01", None);
    static ref BASE32_LOWER: Encoding = encoding("abcdefghijklmnopqrstuvwxyz234567", None);
    static ref BASE32_LOWER_PAD: Encoding = encoding("abcdefghijklmnopqrstuvwxyz234567", Some('='));
    static ref BASE32HEX_LOWER: Encoding = encoding("0123456789abcdefghijklmnopqrstuv", None);
    static ref BASE32HEX_LOWER_PAD: Encoding =
        encoding("0123456789abcdefghijklmnopqrstuv", Some('='));

    /// Lookup by name, built once from [`Base::ALL`].
    static ref BY_NAME: FxHashMap<&'static str, Base> = {
        let mut map = FxHashMap::default();
        for base in Base::ALL {
            map.insert(base.name(), base);
        }
        map
    };
}

/// Builds a custom encoding from a fixed symbol table.
fn encoding(symbols: &str, padding: Option<char>) -> Encoding {
    let mut spec = Specification::new();
    spec.symbols.push_str(symbols);
    spec.padding = padding;
    // The symbol tables above are constant and valid.
    spec.encoding().expect("valid multibase specification")
}

/// Textual multibase encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Base2,
    Base16,
    Base16Upper,
    Base32,
    Base32Upper,
    Base32Pad,
    Base32PadUpper,
    Base32Hex,
    Base32HexUpper,
    Base32HexPad,
    Base32HexPadUpper,
    Base58Btc,
    Base58Flickr,
    Base64,
    Base64Pad,
    Base64Url,
    Base64UrlPad,
}

impl Base {
    /// Every textual base.
    pub const ALL: [Base; 17] = [
        Base::Base2,
        Base::Base16,
        Base::Base16Upper,
        Base::Base32,
        Base::Base32Upper,
        Base::Base32Pad,
        Base::Base32PadUpper,
        Base::Base32Hex,
        Base::Base32HexUpper,
        Base::Base32HexPad,
        Base::Base32HexPadUpper,
        Base::Base58Btc,
        Base::Base58Flickr,
        Base::Base64,
        Base::Base64Pad,
        Base::Base64Url,
        Base::Base64UrlPad,
    ];

    /// The one-character marker that prefixes text in this base.
    pub fn prefix(self) -> char {
        match self {
            Base::Base2 => '0',
            Base::Base16 => 'f',
            Base::Base16Upper => 'F',
            Base::Base32 => 'b',
            Base::Base32Upper => 'B',
            Base::Base32Pad => 'c',
            Base::Base32PadUpper => 'C',
            Base::Base32Hex => 'v',
            Base::Base32HexUpper => 'V',
            Base::Base32HexPad => 't',
            Base::Base32HexPadUpper => 'T',
            Base::Base58Btc => 'z',
            Base::Base58Flickr => 'Z',
            Base::Base64 => 'm',
            Base::Base64Pad => 'M',
            Base::Base64Url => 'u',
            Base::Base64UrlPad => 'U',
        }
    }

    /// Registered multibase name.
    pub fn name(self) -> &'static str {
        match self {
            Base::Base2 => "base2",
            Base::Base16 => "base16",
            Base::Base16Upper => "base16upper",
            Base::Base32 => "base32",
            Base::Base32Upper => "base32upper",
            Base::Base32Pad => "base32pad",
            Base::Base32PadUpper => "base32padupper",
            Base::Base32Hex => "base32hex",
            Base::Base32HexUpper => "base32hexupper",
            Base::Base32HexPad => "base32hexpad",
            Base::Base32HexPadUpper => "base32hexpadupper",
            Base::Base58Btc => "base58btc",
            Base::Base58Flickr => "base58flickr",
            Base::Base64 => "base64",
            Base::Base64Pad => "base64pad",
            Base::Base64Url => "base64url",
            Base::Base64UrlPad => "base64urlpad",
        }
    }

    /// Numeric multibase code (the marker's code point).
    pub fn code(self) -> u64 {
        self.prefix() as u64
    }

    /// Looks up a base by its marker character.
    pub fn from_prefix(prefix: char) -> Option<Base> {
        Base::ALL.into_iter().find(|b| b.prefix() == prefix)
    }

    /// Looks up a base by registered name or by one-character marker.
    pub fn from_name(name: &str) -> Result<Base, BaseError> {
        if let Some(base) = BY_NAME.get(name) {
            return Ok(*base);
        }
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(base) = Base::from_prefix(c) {
                return Ok(base);
            }
        }
        if name == "identity" || name == "\0" {
            return Err(BaseError::NotTextual {
                name: "identity".to_string(),
            });
        }
        Err(BaseError::UnknownBase {
            name: name.to_string(),
        })
    }

    /// Encodes bytes in this base, without the marker.
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Base::Base2 => BASE2.encode(data),
            Base::Base16 => HEXLOWER.encode(data),
            Base::Base16Upper => HEXUPPER.encode(data),
            Base::Base32 => BASE32_LOWER.encode(data),
            Base::Base32Upper => BASE32_NOPAD.encode(data),
            Base::Base32Pad => BASE32_LOWER_PAD.encode(data),
            Base::Base32PadUpper => BASE32.encode(data),
            Base::Base32Hex => BASE32HEX_LOWER.encode(data),
            Base::Base32HexUpper => BASE32HEX_NOPAD.encode(data),
            Base::Base32HexPad => BASE32HEX_LOWER_PAD.encode(data),
            Base::Base32HexPadUpper => BASE32HEX.encode(data),
            Base::Base58Btc => bs58::encode(data).into_string(),
            Base::Base58Flickr => bs58::encode(data)
                .with_alphabet(bs58::Alphabet::FLICKR)
                .into_string(),
            Base::Base64 => BASE64_NOPAD.encode(data),
            Base::Base64Pad => BASE64.encode(data),
            Base::Base64Url => BASE64URL_NOPAD.encode(data),
            Base::Base64UrlPad => BASE64URL.encode(data),
        }
    }

    /// Encodes bytes in this base, with the marker.
    pub fn encode_prefixed(self, data: &[u8]) -> String {
        let body = self.encode(data);
        let mut s = String::with_capacity(body.len() + 1);
        s.push(self.prefix());
        s.push_str(&body);
        s
    }

    /// Decodes text in this base (marker already stripped).
    pub fn decode(self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let input = text.as_bytes();
        let result = match self {
            Base::Base2 => BASE2.decode(input).ok(),
            Base::Base16 => HEXLOWER.decode(input).ok(),
            Base::Base16Upper => HEXUPPER.decode(input).ok(),
            Base::Base32 => BASE32_LOWER.decode(input).ok(),
            Base::Base32Upper => BASE32_NOPAD.decode(input).ok(),
            Base::Base32Pad => BASE32_LOWER_PAD.decode(input).ok(),
            Base::Base32PadUpper => BASE32.decode(input).ok(),
            Base::Base32Hex => BASE32HEX_LOWER.decode(input).ok(),
            Base::Base32HexUpper => BASE32HEX_NOPAD.decode(input).ok(),
            Base::Base32HexPad => BASE32HEX_LOWER_PAD.decode(input).ok(),
            Base::Base32HexPadUpper => BASE32HEX.decode(input).ok(),
            Base::Base58Btc => bs58::decode(text).into_vec().ok(),
            Base::Base58Flickr => bs58::decode(text)
                .with_alphabet(bs58::Alphabet::FLICKR)
                .into_vec()
                .ok(),
            Base::Base64 => BASE64_NOPAD.decode(input).ok(),
            Base::Base64Pad => BASE64.decode(input).ok(),
            Base::Base64Url => BASE64URL_NOPAD.decode(input).ok(),
            Base::Base64UrlPad => BASE64URL.decode(input).ok(),
        };
        result.ok_or(DecodeError::InvalidBaseData { base: self.name() })
    }

    /// Reads the base from the marker of prefixed text.
    pub fn from_marked(text: &str) -> Result<Base, DecodeError> {
        let prefix = text.chars().next().ok_or(DecodeError::TooShort { len: 0 })?;
        Base::from_prefix(prefix).ok_or(DecodeError::UnknownPrefix { prefix })
    }

    /// Decodes text carrying this base's marker.
    pub fn decode_marked(self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let payload = text
            .strip_prefix(self.prefix())
            .ok_or(DecodeError::UnknownPrefix {
                prefix: text.chars().next().unwrap_or('\0'),
            })?;
        self.decode(payload)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Base::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // "yes mani !" vectors from the multibase test suite
        let data = b"yes mani !";
        assert_eq!(
            Base::Base2.encode_prefixed(data),
            "001111001011001010111001100100000011011010110000101101110011010010010000000100001"
        );
        assert_eq!(Base::Base16.encode_prefixed(data), "f796573206d616e692021");
        assert_eq!(Base::Base16Upper.encode_prefixed(data), "F796573206D616E692021");
        assert_eq!(Base::Base32.encode_prefixed(data), "bpfsxgidnmfxgsibb");
        assert_eq!(Base::Base32Upper.encode_prefixed(data), "BPFSXGIDNMFXGSIBB");
        assert_eq!(Base::Base32Pad.encode_prefixed(data), "cpfsxgidnmfxgsibb");
        assert_eq!(Base::Base32Hex.encode_prefixed(data), "vf5in683dc5n6i811");
        assert_eq!(Base::Base58Btc.encode_prefixed(data), "z7paNL19xttacUY");
        assert_eq!(Base::Base58Flickr.encode_prefixed(data), "Z7Pznk19XTTzBtx");
        assert_eq!(Base::Base64.encode_prefixed(data), "meWVzIG1hbmkgIQ");
        assert_eq!(Base::Base64Pad.encode_prefixed(data), "MeWVzIG1hbmkgIQ==");
        assert_eq!(Base::Base64Url.encode_prefixed(data), "ueWVzIG1hbmkgIQ");
        assert_eq!(Base::Base64UrlPad.encode_prefixed(data), "UeWVzIG1hbmkgIQ==");
    }

    #[test]
    fn test_decode_every_base() {
        let data = b"\x00\x01hello world\xff";
        for base in Base::ALL {
            let text = base.encode_prefixed(data);
            assert_eq!(Base::from_marked(&text).unwrap(), base);
            assert_eq!(base.decode_marked(&text).unwrap(), data, "base {}", base);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Base::from_name("base32").unwrap(), Base::Base32);
        assert_eq!(Base::from_name("z").unwrap(), Base::Base58Btc);
        assert_eq!("base64url".parse::<Base>().unwrap(), Base::Base64Url);
        assert!(matches!(
            Base::from_name("base99"),
            Err(BaseError::UnknownBase { .. })
        ));
        assert!(matches!(
            Base::from_name("identity"),
            Err(BaseError::NotTextual { .. })
        ));
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(
            Base::from_marked("not-a-cid"),
            Err(DecodeError::UnknownPrefix { prefix: 'n' })
        );
        assert_eq!(
            Base::Base32.decode_marked("zabc"),
            Err(DecodeError::UnknownPrefix { prefix: 'z' })
        );
    }

    #[test]
    fn test_wrong_case_rejected() {
        assert!(matches!(
            Base::Base32.decode("PFSXGIDNMFXGSIBB"),
            Err(DecodeError::InvalidBaseData { base: "base32" })
        ));
    }
}
