use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A line that matched a directive's shape but failed validation.
///
/// Reported per line by the scanner; never aborts a file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("`{keyword}` expects {expected} operands, found {found}")]
    Arity {
        keyword: String,
        expected: &'static str,
        found: usize,
    },

    #[error("Invalid integer operand `{0}`")]
    Integer(String),

    #[error("Invalid rate operand `{0}`")]
    Rate(String),

    #[error("Stat total of {0} overflows")]
    Overflow(String),

    #[error("`end_{close}_wildmons` closes a `{open}` table")]
    MismatchedTable { open: String, close: String },

    #[error("`{0}` outside of any block")]
    Orphan(String),
}

/// Failures at the I/O edges of an extraction run.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Source not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode {domain}: {source}")]
    Encode {
        domain: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid layout file {path}: {source}")]
    Layout {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

/// Parse a decimal operand, reporting the offending text.
pub(crate) fn parse_int<T: std::str::FromStr>(operand: &str) -> Result<T, LineError> {
    operand
        .trim()
        .parse()
        .map_err(|_| LineError::Integer(operand.trim().to_string()))
}
