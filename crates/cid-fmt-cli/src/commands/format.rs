//! Format and base32 command implementations.

use std::io::Read;

use cid_fmt::{DefaultRegistry, FormatOptions, FormatResult, format_each};

use crate::error::CliError;

pub fn run(
    cids: Vec<String>,
    template: String,
    version: Option<String>,
    base: Option<String>,
) -> Result<(), CliError> {
    let options = FormatOptions::from_flags(Some(&template), version.as_deref(), base.as_deref())?;
    emit(&cids, &options)
}

pub fn run_base32(cids: Vec<String>) -> Result<(), CliError> {
    let cids = if cids.is_empty() { read_stdin()? } else { cids };
    emit(&cids, &FormatOptions::base32())
}

fn read_stdin() -> Result<Vec<String>, CliError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.split_whitespace().map(str::to_string).collect())
}

/// Prints each result as it is produced. Per-item errors go to stderr and
/// turn into a non-zero exit once every item has been printed.
fn emit(cids: &[String], options: &FormatOptions) -> Result<(), CliError> {
    let mut failed = 0;
    format_each(cids, options, &DefaultRegistry, |result: FormatResult| {
        match &result.outcome {
            Ok(formatted) => println!("{}", formatted),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", result.input, e);
            }
        }
    })?;

    if failed > 0 {
        return Err(CliError::ItemsFailed {
            failed,
            total: cids.len(),
        });
    }
    Ok(())
}
