//! Error types for the vigil-drift crate.

/// Error type for all fallible operations in the vigil-drift crate.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    /// Returned when no columns are given to a per-column check.
    #[error("no columns to compare")]
    EmptyColumns,

    /// Returned when a column has different lengths in the two datasets.
    #[error("column '{column}': {new} new rows vs {historical} historical rows")]
    LengthMismatch {
        /// Column being compared.
        column: String,
        /// Rows in the new dataset.
        new: usize,
        /// Rows in the historical dataset.
        historical: usize,
    },

    /// Returned when a column is too short or degenerate for a test.
    #[error("column '{column}': insufficient data ({n} usable rows, need {min})")]
    InsufficientData {
        /// Column being compared.
        column: String,
        /// Usable rows found.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when a significance threshold is outside (0, 1].
    #[error("significance threshold must be in (0, 1], got {value}")]
    InvalidSignificance {
        /// The invalid threshold.
        value: f64,
    },

    /// Returned when a correlation floor is outside [-1, 1].
    #[error("correlation floor must be within [-1, 1], got {value}")]
    InvalidFloor {
        /// The invalid floor.
        value: f64,
    },

    /// Dataset access failed.
    #[error(transparent)]
    Io(#[from] vigil_io::IoError),

    /// The best-k scan failed.
    #[error(transparent)]
    Knn(#[from] vigil_knn::KnnError),
}
