//! Sorted, filtered listings of registry tables.
//!
//! Ordering never depends on table order: every table is sorted by a total
//! key derived from the entry's code alone.

use std::cmp::Reverse;

use crate::registry::{CodeAndName, Registry};

/// Sort key applied to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Case-folded marker character; lowercase first on a case tie.
    CaseFoldedMarker,
    /// Ascending numeric code.
    NumericCode,
}

impl SortOrder {
    /// Returns the sort key for an entry code.
    pub fn key(self, code: u64) -> (u64, Reverse<u64>) {
        match self {
            // Lowercase letters have the larger code point, so the reversed
            // raw code puts them first.
            SortOrder::CaseFoldedMarker => (fold_case(code), Reverse(code)),
            SortOrder::NumericCode => (code, Reverse(0)),
        }
    }

    /// Returns a sorted copy of `entries`.
    pub fn sorted(self, entries: &[CodeAndName]) -> Vec<CodeAndName> {
        let mut sorted = entries.to_vec();
        sorted.sort_by_key(|entry| self.key(entry.code));
        sorted
    }
}

fn fold_case(code: u64) -> u64 {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .and_then(|c| c.to_lowercase().next())
        .map_or(code, |c| c as u64)
}

/// Optional columns for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Include the one-character marker (multibase listings only).
    pub prefix: bool,
    /// Include the numeric code.
    pub numeric: bool,
}

/// One displayed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    /// Marker column; empty when the marker is not printable.
    pub prefix: Option<String>,
    pub code: Option<u64>,
    pub name: String,
}

impl ListingRow {
    /// Columns in display order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(3);
        if let Some(prefix) = &self.prefix {
            columns.push(prefix.clone());
        }
        if let Some(code) = self.code {
            columns.push(code.to_string());
        }
        columns.push(self.name.clone());
        columns
    }
}

fn printable_marker(code: u64) -> String {
    match code {
        32..=126 => char::from(code as u8).to_string(),
        _ => String::new(),
    }
}

fn rows(entries: Vec<CodeAndName>, options: ListOptions) -> Vec<ListingRow> {
    entries
        .into_iter()
        .map(|entry| ListingRow {
            prefix: options.prefix.then(|| printable_marker(entry.code)),
            code: options.numeric.then_some(entry.code),
            name: entry.name,
        })
        .collect()
}

/// Lists multibase encodings ordered by marker.
pub fn list_multibases<R: Registry + ?Sized>(registry: &R, options: ListOptions) -> Vec<ListingRow> {
    let entries = SortOrder::CaseFoldedMarker.sorted(registry.multibases());
    rows(entries, options)
}

/// Lists codecs ordered by code.
pub fn list_codecs<R: Registry + ?Sized>(registry: &R, numeric: bool) -> Vec<ListingRow> {
    let entries = SortOrder::NumericCode.sorted(registry.codecs());
    rows(entries, ListOptions { prefix: false, numeric })
}

/// Lists acceptable hash functions ordered by code.
///
/// Unacceptable hash functions are omitted entirely.
pub fn list_hashes<R: Registry + ?Sized>(registry: &R, numeric: bool) -> Vec<ListingRow> {
    let acceptable: Vec<CodeAndName> = registry
        .hashes()
        .iter()
        .filter(|entry| registry.is_acceptable_hash(entry.code))
        .cloned()
        .collect();
    let entries = SortOrder::NumericCode.sorted(&acceptable);
    rows(entries, ListOptions { prefix: false, numeric })
}
