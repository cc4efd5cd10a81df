//! End-to-end batch formatting scenarios.

use cid_fmt::{
    Base, BaseSelection, Cid, DecodeError, DefaultRegistry, FormatError, FormatOptions, ItemError,
    ListOptions, Multihash, RenderError, TableRegistry, VersionConversion, format_cids, format_each,
    list_multibases,
};

const V0_TEXT: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";
const V1_TEXT: &str = "bafybeihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn options(template: &str, version: VersionConversion, base: BaseSelection) -> FormatOptions {
    FormatOptions {
        template: template.to_string(),
        version,
        base,
    }
}

#[test]
fn mixed_batch_isolates_failures() {
    let options = FormatOptions::from_flags(None, Some("1"), None).unwrap();
    let results = format_cids([V0_TEXT, "not-a-cid", V1_TEXT], &options, &DefaultRegistry).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].input, V0_TEXT);
    assert_eq!(results[1].input, "not-a-cid");
    assert_eq!(results[2].input, V1_TEXT);

    // Upgraded, still in the base58btc the input used
    let upgraded = Cid::decode(results[0].formatted()).unwrap();
    assert_eq!(upgraded, Cid::decode(V1_TEXT).unwrap());
    assert!(results[0].formatted().starts_with('z'));

    assert_eq!(
        results[1].outcome,
        Err(ItemError::Decode(DecodeError::UnknownPrefix { prefix: 'n' }))
    );
    assert_eq!(results[1].formatted(), "");

    assert_eq!(results[2].formatted(), V1_TEXT);
}

#[test]
fn literal_percent_renders_for_any_identifier() {
    let options = options("%%", VersionConversion::Keep, BaseSelection::Original);
    let results = format_cids([V0_TEXT, V1_TEXT], &options, &DefaultRegistry).unwrap();
    assert!(results.iter().all(|r| r.formatted() == "%"));
}

#[test]
fn unterminated_template_fails_even_for_empty_batch() {
    let options = options("%s%", VersionConversion::Keep, BaseSelection::Original);
    let empty: [&str; 0] = [];
    assert_eq!(
        format_cids(empty, &options, &DefaultRegistry),
        Err(FormatError::Unterminated)
    );
    assert_eq!(
        format_cids([V0_TEXT, V1_TEXT], &options, &DefaultRegistry),
        Err(FormatError::Unterminated)
    );
}

#[test]
fn digest_hex_is_independent_of_base_and_version() {
    for version in [VersionConversion::Keep, VersionConversion::ToV0, VersionConversion::ToV1] {
        for base in [BaseSelection::Original, Base::Base16Upper.into(), Base::Base58Flickr.into()] {
            let options = options("%d", version, base);
            let results = format_cids([V0_TEXT, V1_TEXT], &options, &DefaultRegistry).unwrap();
            for result in results {
                assert_eq!(result.formatted(), EMPTY_SHA256);
            }
        }
    }
}

#[test]
fn digest_hex_of_known_bytes() {
    let cid = Cid::new_v1(0x55, Multihash::new(0x12, vec![0x00, 0x01, 0xfe, 0xff]).unwrap());
    let text = cid.to_text(Base::Base64Url);
    let options = options("%d", VersionConversion::ToV1, Base::Base2.into());
    let results = format_cids([text], &options, &DefaultRegistry).unwrap();
    assert_eq!(results[0].formatted(), "0001feff");
}

#[test]
fn explicit_base_applies_after_conversion() {
    let options = options("%s %b %v", VersionConversion::ToV1, Base::Base16.into());
    let results = format_cids([V0_TEXT], &options, &DefaultRegistry).unwrap();
    assert_eq!(
        results[0].formatted(),
        format!("f01701220{} base16 cidv1", EMPTY_SHA256)
    );
}

#[test]
fn render_failures_are_per_item_with_synthetic_registry() {
    let registry = TableRegistry::new().with_codec(0x70, "dag-pb");
    let raw = Cid::new_v1(0x55, Multihash::sha2_256(b"")).to_text(Base::Base32);
    let options = options("%c", VersionConversion::Keep, BaseSelection::Original);

    let mut seen = Vec::new();
    format_each([V1_TEXT, raw.as_str()], &options, &registry, |r| seen.push(r)).unwrap();

    assert_eq!(seen[0].formatted(), "dag-pb");
    assert_eq!(
        seen[1].outcome,
        Err(ItemError::Render(RenderError::UnknownCodecName { code: 0x55 }))
    );
}

#[test]
fn multibase_listing_case_tie_order() {
    let registry = TableRegistry::new()
        .with_multibase(b'B' as u64, "base32upper")
        .with_multibase(b'b' as u64, "base32")
        .with_multibase(b'F' as u64, "base16upper")
        .with_multibase(b'f' as u64, "base16");
    let rows = list_multibases(&registry, ListOptions { prefix: true, numeric: true });
    let columns: Vec<Vec<String>> = rows.iter().map(|r| r.columns()).collect();
    assert_eq!(
        columns,
        [
            ["b", "98", "base32"],
            ["B", "66", "base32upper"],
            ["f", "102", "base16"],
            ["F", "70", "base16upper"],
        ]
    );
}

#[test]
fn v0_in_explicit_base_reports_the_printed_version() {
    let options = options("%s %v", VersionConversion::Keep, Base::Base32.into());
    let results = format_cids([V0_TEXT], &options, &DefaultRegistry).unwrap();
    assert_eq!(results[0].formatted(), format!("{} cidv1", V1_TEXT));
}
