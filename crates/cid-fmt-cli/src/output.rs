//! Output formatting utilities.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Padding, Style};

/// Aligns rows into columns separated by two spaces. Lines carry no trailing
/// whitespace.
pub fn align_columns(rows: &[Vec<String>]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let mut table = Builder::from(rows.to_vec()).build();
    table
        .with(Style::empty())
        .with(Padding::new(0, 2, 0, 0))
        .modify(Columns::last(), Padding::new(0, 0, 0, 0));

    table
        .to_string()
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
