//! CLI error type.

use cid_fmt::{BaseError, FormatError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Request(#[from] BaseError),

    #[error(transparent)]
    Template(#[from] FormatError),

    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("{failed} of {total} CIDs could not be formatted")]
    ItemsFailed { failed: usize, total: usize },
}
