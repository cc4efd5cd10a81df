//! Rendering a parsed template against one identifier.

use crate::codec::Base;
use crate::error::RenderError;
use crate::format::template::{Directive, Segment, Template};
use crate::model::{Cid, Version};
use crate::registry::Registry;

impl Template {
    /// Renders this template for `cid`, printing textual attributes in `base`.
    ///
    /// Rendering is pure: the same template, identifier and base always give
    /// the same string. A version 0 identifier outside base58btc is rendered
    /// entirely from its version 1 form, the one `%s` prints.
    pub fn render<R: Registry + ?Sized>(
        &self,
        cid: &Cid,
        base: Base,
        registry: &R,
    ) -> Result<String, RenderError> {
        let upgraded;
        let cid = if cid.version() == Version::V0 && base != Base::Base58Btc {
            upgraded = cid.to_v1();
            &upgraded
        } else {
            cid
        };

        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Directive(directive) => {
                    out.push_str(&render_directive(*directive, cid, base, registry)?)
                }
            }
        }
        Ok(out)
    }
}

fn codec_name<'r, R: Registry + ?Sized>(cid: &Cid, registry: &'r R) -> Result<&'r str, RenderError> {
    registry
        .codec_name(cid.codec())
        .ok_or(RenderError::UnknownCodecName { code: cid.codec() })
}

fn hash_name<'r, R: Registry + ?Sized>(cid: &Cid, registry: &'r R) -> Result<&'r str, RenderError> {
    let code = cid.hash().code();
    registry
        .hash_name(code)
        .ok_or(RenderError::UnknownHashName { code })
}

fn render_directive<R: Registry + ?Sized>(
    directive: Directive,
    cid: &Cid,
    base: Base,
    registry: &R,
) -> Result<String, RenderError> {
    let hash = cid.hash();
    let rendered = match directive {
        Directive::Text => cid.to_text(base),
        Directive::TextUnprefixed => cid.to_text_unprefixed(base),
        Directive::BaseName => base.name().to_string(),
        Directive::BasePrefix => base.prefix().to_string(),
        Directive::VersionString => cid.version().to_string(),
        Directive::VersionNumber => cid.version().number().to_string(),
        Directive::CodecName => codec_name(cid, registry)?.to_string(),
        Directive::CodecCode => cid.codec().to_string(),
        Directive::HashName => hash_name(cid, registry)?.to_string(),
        Directive::HashCode => hash.code().to_string(),
        Directive::DigestLength => hash.digest().len().to_string(),
        Directive::DigestHex => hex::encode(hash.digest()),
        Directive::DigestBase => base.encode_prefixed(hash.digest()),
        Directive::Multihash => base.encode_prefixed(&hash.to_bytes()),
        Directive::MultihashUnprefixed => base.encode(&hash.to_bytes()),
        Directive::Prefix => format!(
            "{}-{}-{}-{}",
            cid.version(),
            codec_name(cid, registry)?,
            hash_name(cid, registry)?,
            hash.digest().len()
        ),
    };
    Ok(rendered)
}
