//! Property tests for identifier round trips, conversion legality and
//! listing order.

use cid_fmt::limits::{LEGACY_CODEC, MAX_CID_TEXT_LEN, MAX_DIGEST_LEN};
use cid_fmt::{
    Base, Cid, ConversionError, ListOptions, Multihash, TableRegistry, Version, list_hashes,
    list_multibases,
};
use proptest::prelude::*;

fn any_base() -> impl Strategy<Value = Base> {
    (0..Base::ALL.len()).prop_map(|i| Base::ALL[i])
}

fn any_multihash() -> impl Strategy<Value = Multihash> {
    (0u64..=u32::MAX as u64, prop::collection::vec(any::<u8>(), 0..=MAX_DIGEST_LEN))
        .prop_map(|(code, digest)| Multihash::new(code, digest).unwrap())
}

fn v0_compatible_cid() -> impl Strategy<Value = Cid> {
    (prop::array::uniform32(any::<u8>()), any::<bool>()).prop_map(|(digest, as_v0)| {
        let cid = Cid::new_v1(LEGACY_CODEC, Multihash::new(0x12, digest.to_vec()).unwrap());
        if as_v0 { cid.to_v0().unwrap() } else { cid }
    })
}

proptest! {
    #[test]
    fn v1_text_round_trips_in_original_base(
        codec in 0u64..=u32::MAX as u64,
        hash in any_multihash(),
        base in any_base(),
    ) {
        let cid = Cid::new_v1(codec, hash);
        let text = cid.to_text(base);

        prop_assert!(text.len() <= MAX_CID_TEXT_LEN);
        let (decoded, original) = Cid::decode_with_base(&text).unwrap();
        prop_assert_eq!(&decoded, &cid);
        prop_assert_eq!(original, base);
        prop_assert_eq!(decoded.to_text(original), text);
    }

    #[test]
    fn oversized_digests_are_unrepresentable(
        code in 0u64..=u32::MAX as u64,
        extra in 1usize..64,
    ) {
        prop_assert!(Multihash::new(code, vec![0u8; MAX_DIGEST_LEN + extra]).is_err());
    }

    #[test]
    fn legacy_codec_converts_both_ways(cid in v0_compatible_cid()) {
        let down_up = cid.to_v1().to_v0().unwrap();
        prop_assert_eq!(down_up.codec(), cid.codec());
        prop_assert_eq!(down_up.hash(), cid.hash());
        prop_assert_eq!(down_up.version(), Version::V0);

        let up_down_up = cid.to_v0().unwrap().to_v1();
        prop_assert_eq!(up_down_up.codec(), cid.codec());
        prop_assert_eq!(up_down_up.hash(), cid.hash());
        prop_assert_eq!(up_down_up.version(), Version::V1);
    }

    #[test]
    fn other_codecs_never_downgrade(
        codec in (0u64..=u32::MAX as u64).prop_filter("legacy codec", |c| *c != LEGACY_CODEC),
        hash in any_multihash(),
    ) {
        let cid = Cid::new_v1(codec, hash);
        prop_assert_eq!(cid.to_v0(), Err(ConversionError::UnsupportedCodecForV0 { codec }));
    }

    #[test]
    fn v0_text_round_trips(cid in v0_compatible_cid()) {
        let v0 = cid.to_v0().unwrap();
        let text = v0.to_text(Base::Base58Btc);
        prop_assert_eq!(text.len(), 46);
        prop_assert!(text.starts_with("Qm"));
        prop_assert_eq!(Cid::decode(&text).unwrap(), v0);
    }

    #[test]
    fn hash_listing_never_contains_unacceptable(
        entries in prop::collection::btree_map(0u64..0x10000, any::<bool>(), 0..40),
    ) {
        let mut registry = TableRegistry::new();
        for (code, acceptable) in &entries {
            registry = registry.with_hash(*code, format!("hash-{:x}", code), *acceptable);
        }

        let rows = list_hashes(&registry, true);
        let codes: Vec<u64> = rows.iter().map(|r| r.code.unwrap()).collect();
        let expected: Vec<u64> = entries
            .iter()
            .filter(|(_, acceptable)| **acceptable)
            .map(|(code, _)| *code)
            .collect();
        prop_assert_eq!(codes, expected);
    }

    #[test]
    fn multibase_listing_orders_case_ties_lowercase_first(
        letters in prop::collection::btree_set(b'a'..=b'z', 1..10),
    ) {
        let mut registry = TableRegistry::new();
        for letter in letters.iter().rev() {
            registry = registry
                .with_multibase(letter.to_ascii_uppercase() as u64, format!("{}-upper", *letter as char))
                .with_multibase(*letter as u64, format!("{}-lower", *letter as char));
        }

        let rows = list_multibases(&registry, ListOptions { prefix: true, numeric: false });
        let expected: Vec<String> = letters
            .iter()
            .flat_map(|l| [(*l as char).to_string(), (l.to_ascii_uppercase() as char).to_string()])
            .collect();
        let prefixes: Vec<String> = rows.into_iter().map(|r| r.prefix.unwrap()).collect();
        prop_assert_eq!(prefixes, expected);
    }
}
