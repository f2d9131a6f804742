//! Error types

use thiserror::Error;

/// Misuse of the programmatic API.
///
/// Cell parsing never fails with an error; unparseable text is reported
/// through `None` by the normalizers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("table '{0}' not found")]
    UnknownTable(String),

    #[error("element '{0}' not found")]
    UnknownElement(String),

    #[error("table '{0}' has no header row")]
    MissingHeader(String),

    #[error("column {column} out of range for table '{table}'")]
    ColumnOutOfRange { table: String, column: usize },

    #[error("column {column} of table '{table}' is not sortable")]
    NotSortable { table: String, column: usize },

    #[error("no column type named '{0}'")]
    UnknownColumnType(String),

    #[error("'{0}' is not a tab input")]
    NotATab(String),

    #[error("invalid user agent pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
