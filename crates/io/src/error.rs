//! Error types for vigil-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the vigil-io crate.
///
/// Covers file access, CSV parsing, and data-model mismatches found when
/// assembling or querying a [`crate::Dataset`].
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a cell cannot be interpreted as a number or a
    /// missing-value token.
    #[error("invalid number '{value}' in column '{column}', row {row}")]
    InvalidNumber {
        /// 1-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Offending cell contents.
        value: String,
    },

    /// Returned when a referenced column does not exist.
    #[error("column '{name}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when columns have inconsistent lengths.
    #[error("column '{name}' has {got} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Expected number of rows.
        expected: usize,
        /// Actual number of rows.
        got: usize,
    },

    /// Returned when a dataset has no columns.
    #[error("dataset has no columns")]
    EmptyDataset,
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
