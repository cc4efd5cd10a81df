//! Registry listing commands.

use cid_fmt::{DefaultRegistry, ListOptions, ListingRow, list_codecs, list_hashes, list_multibases};

use crate::error::CliError;
use crate::output;

fn print(rows: &[ListingRow]) {
    let columns: Vec<Vec<String>> = rows.iter().map(ListingRow::columns).collect();
    for line in output::align_columns(&columns) {
        println!("{}", line);
    }
}

pub fn bases(prefix: bool, numeric: bool) -> Result<(), CliError> {
    print(&list_multibases(&DefaultRegistry, ListOptions { prefix, numeric }));
    Ok(())
}

pub fn codecs(numeric: bool) -> Result<(), CliError> {
    print(&list_codecs(&DefaultRegistry, numeric));
    Ok(())
}

pub fn hashes(numeric: bool) -> Result<(), CliError> {
    print(&list_hashes(&DefaultRegistry, numeric));
    Ok(())
}
