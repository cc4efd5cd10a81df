//! Batch formatting: decode → convert → render, one result per input.
//!
//! Per-item failures are attached to that item's [`FormatResult`] and never
//! abort the batch. A bad template is detected once, before the first item
//! is touched, and aborts the whole call.

use crate::codec::{Base, BaseSelection};
use crate::error::{BaseError, FormatError, ItemError};
use crate::format::Template;
use crate::model::{Cid, Version, VersionConversion};
use crate::registry::Registry;

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "%s";

/// Batch-global options, validated at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Template text; parsed once per batch.
    pub template: String,
    /// Version to convert each identifier to.
    pub version: VersionConversion,
    /// Base for textual directives.
    pub base: BaseSelection,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            version: VersionConversion::Keep,
            base: BaseSelection::Original,
        }
    }
}

impl FormatOptions {
    /// Builds options from untyped flag values.
    ///
    /// Empty strings count as absent. `version` must be `"0"` or `"1"`;
    /// `base` must be a registered multibase name or marker.
    pub fn from_flags(
        template: Option<&str>,
        version: Option<&str>,
        base: Option<&str>,
    ) -> Result<Self, BaseError> {
        let version = match version.unwrap_or("") {
            "" => VersionConversion::Keep,
            "0" => VersionConversion::ToV0,
            "1" => VersionConversion::ToV1,
            other => {
                return Err(BaseError::InvalidVersion {
                    version: other.to_string(),
                });
            }
        };
        let base = match base.unwrap_or("") {
            "" => BaseSelection::Original,
            name => BaseSelection::Explicit(Base::from_name(name)?),
        };
        Ok(Self {
            template: template.unwrap_or(DEFAULT_TEMPLATE).to_string(),
            version,
            base,
        })
    }

    /// Plain text in base32, converted to version 1.
    pub fn base32() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            version: VersionConversion::ToV1,
            base: BaseSelection::Explicit(Base::Base32),
        }
    }

    /// Parses the template, rejecting templates with no `%` at all.
    pub fn parse_template(&self) -> Result<Template, FormatError> {
        if !self.template.contains('%') {
            return Err(FormatError::NoDirectives {
                template: self.template.clone(),
            });
        }
        Template::parse(&self.template)
    }
}

/// Outcome for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// The input exactly as given.
    pub input: String,
    /// Rendered text, or the item's failure.
    pub outcome: Result<String, ItemError>,
}

impl FormatResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Rendered text; empty on failure.
    pub fn formatted(&self) -> &str {
        self.outcome.as_deref().unwrap_or("")
    }
}

/// Decodes, converts and renders one input with an already-parsed template.
pub fn format_one<R: Registry + ?Sized>(
    input: &str,
    template: &Template,
    options: &FormatOptions,
    registry: &R,
) -> Result<String, ItemError> {
    let (cid, original) = Cid::decode_with_base(input)?;
    let cid = options.version.apply(cid)?;
    let base = output_base(&cid, options.base, original);
    Ok(template.render(&cid, base, registry)?)
}

/// A version 0 result keeping its original base prints in base58btc, the
/// only base it has a marker-less form in.
fn output_base(cid: &Cid, selection: BaseSelection, original: Base) -> Base {
    match selection {
        BaseSelection::Original if cid.version() == Version::V0 => Base::Base58Btc,
        selection => selection.resolve(original),
    }
}

/// Formats each input in order, handing every result to `emit` as soon as it
/// is produced.
pub fn format_each<R, I, S, F>(
    inputs: I,
    options: &FormatOptions,
    registry: &R,
    mut emit: F,
) -> Result<(), FormatError>
where
    R: Registry + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(FormatResult),
{
    let template = options.parse_template().inspect_err(|e| {
        tracing::warn!(template = %options.template, error = %e, "rejected format template");
    })?;

    for input in inputs {
        let input = input.as_ref();
        let outcome = format_one(input, &template, options, registry);
        match &outcome {
            Ok(formatted) => tracing::debug!(input, formatted = %formatted, "formatted cid"),
            Err(e) => tracing::debug!(input, error = %e, "failed to format cid"),
        }
        emit(FormatResult {
            input: input.to_string(),
            outcome,
        });
    }
    Ok(())
}

/// Formats every input, collecting results in input order.
pub fn format_cids<R, I, S>(
    inputs: I,
    options: &FormatOptions,
    registry: &R,
) -> Result<Vec<FormatResult>, FormatError>
where
    R: Registry + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = Vec::new();
    format_each(inputs, options, registry, |r| results.push(r))?;
    Ok(results)
}
