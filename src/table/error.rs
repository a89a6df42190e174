//! Table configuration errors.

use thiserror::Error;

/// Errors raised while validating columns or rows.
///
/// These are only produced when a table is built or its rows are replaced;
/// a built table never fails while sorting, selecting or rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column was declared with an empty key.
    #[error("column key cannot be empty")]
    EmptyColumnKey,

    /// Two columns share the same key.
    #[error("duplicate column key '{0}'")]
    DuplicateColumnKey(String),

    /// A column width string could not be parsed.
    #[error("column '{key}': invalid width '{width}'")]
    InvalidWidth {
        /// The column key.
        key: String,
        /// The rejected width string.
        width: String,
    },

    /// Two rows share the same identity.
    #[error("duplicate row id {0}")]
    DuplicateRowId(String),
}

/// Result type for table configuration.
pub type Result<T> = std::result::Result<T, TableError>;
