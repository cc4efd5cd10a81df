//! Template parsing.
//!
//! A template is literal text interleaved with `%x` directives. Parsing is
//! purely structural: it depends only on the template text, so a template
//! that parses once renders (or fails per identifier) the same way for every
//! input.

use crate::error::FormatError;

/// An identifier attribute selected by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `%s`: full textual form in the selected base.
    Text,
    /// `%S`: textual form without multibase marker.
    TextUnprefixed,
    /// `%b`: multibase name.
    BaseName,
    /// `%B`: multibase marker.
    BasePrefix,
    /// `%v`: version string.
    VersionString,
    /// `%V`: version number.
    VersionNumber,
    /// `%c`: codec name.
    CodecName,
    /// `%C`: codec code.
    CodecCode,
    /// `%h`: hash-function name.
    HashName,
    /// `%H`: hash-function code.
    HashCode,
    /// `%L`: digest length.
    DigestLength,
    /// `%d`: digest in lowercase hex.
    DigestHex,
    /// `%D`: digest in the selected base, with marker.
    DigestBase,
    /// `%m`: multihash in the selected base, with marker.
    Multihash,
    /// `%M`: multihash in the selected base, without marker.
    MultihashUnprefixed,
    /// `%P`: `cidv<V>-<codec>-<hash>-<len>`.
    Prefix,
}

impl Directive {
    /// Every directive.
    pub const ALL: [Directive; 16] = [
        Directive::Text,
        Directive::TextUnprefixed,
        Directive::BaseName,
        Directive::BasePrefix,
        Directive::VersionString,
        Directive::VersionNumber,
        Directive::CodecName,
        Directive::CodecCode,
        Directive::HashName,
        Directive::HashCode,
        Directive::DigestLength,
        Directive::DigestHex,
        Directive::DigestBase,
        Directive::Multihash,
        Directive::MultihashUnprefixed,
        Directive::Prefix,
    ];

    /// Creates a Directive from the character following `%`.
    pub fn from_char(c: char) -> Option<Directive> {
        Directive::ALL.into_iter().find(|d| d.as_char() == c)
    }

    /// The character following `%`.
    pub fn as_char(self) -> char {
        match self {
            Directive::Text => 's',
            Directive::TextUnprefixed => 'S',
            Directive::BaseName => 'b',
            Directive::BasePrefix => 'B',
            Directive::VersionString => 'v',
            Directive::VersionNumber => 'V',
            Directive::CodecName => 'c',
            Directive::CodecCode => 'C',
            Directive::HashName => 'h',
            Directive::HashCode => 'H',
            Directive::DigestLength => 'L',
            Directive::DigestHex => 'd',
            Directive::DigestBase => 'D',
            Directive::Multihash => 'm',
            Directive::MultihashUnprefixed => 'M',
            Directive::Prefix => 'P',
        }
    }

    /// One-line description, for help text.
    pub fn description(self) -> &'static str {
        match self {
            Directive::Text => "cid string encoded in base %b",
            Directive::TextUnprefixed => "cid string encoded in base %b without multibase prefix",
            Directive::BaseName => "multibase name",
            Directive::BasePrefix => "multibase prefix",
            Directive::VersionString => "version string",
            Directive::VersionNumber => "version number",
            Directive::CodecName => "codec name",
            Directive::CodecCode => "codec code",
            Directive::HashName => "multihash name",
            Directive::HashCode => "multihash code",
            Directive::DigestLength => "hash digest length",
            Directive::DigestHex => "hash digest in hex",
            Directive::DigestBase => "hash digest encoded in base %b",
            Directive::Multihash => "multihash encoded in base %b",
            Directive::MultihashUnprefixed => "multihash encoded in base %b without multibase prefix",
            Directive::Prefix => "cid prefix: %v-%c-%h-%L",
        }
    }
}

/// A parsed template piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Directive(Directive),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template, left to right.
    ///
    /// `%%` is a literal percent. Any other unknown character after `%`, or a
    /// `%` at the very end, is a [`FormatError`].
    pub fn parse(template: &str) -> Result<Template, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices();

        while let Some((offset, c)) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                None => return Err(FormatError::Unterminated),
                Some((_, '%')) => literal.push('%'),
                Some((_, d)) => {
                    let directive = Directive::from_char(d).ok_or(FormatError::UnknownDirective {
                        directive: d,
                        offset,
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Directive(directive));
                }
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Reference text listing every directive.
pub fn format_reference() -> String {
    let mut reference = String::from("%% literal %\n");
    for directive in Directive::ALL {
        reference.push('%');
        reference.push(directive.as_char());
        reference.push(' ');
        reference.push_str(directive.description());
        reference.push('\n');
    }
    reference
}
