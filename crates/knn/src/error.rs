//! Error types for the vigil-knn crate.

/// Error type for all fallible operations in the vigil-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when the training feature matrix is empty.
    #[error("no training rows provided")]
    EmptyTraining,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when the scanned k range contains no candidates.
    #[error("k range {start}..={end} is empty")]
    EmptyKRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
    },

    /// Returned when the feature slice length is not divisible by n_vars.
    #[error("features length {len} is not divisible by n_vars {n_vars}")]
    FeaturesShapeMismatch {
        /// Length of the features slice.
        len: usize,
        /// Expected number of variables per row.
        n_vars: usize,
    },

    /// Returned when the number of targets differs from the number of rows.
    #[error("got {targets} targets for {rows} training rows")]
    TargetLengthMismatch {
        /// Number of targets supplied.
        targets: usize,
        /// Number of training rows.
        rows: usize,
    },

    /// Returned when a query row has the wrong dimension.
    #[error("query dimension {got} does not match trained dimension {expected}")]
    QueryDimensionMismatch {
        /// Trained number of variables per row.
        expected: usize,
        /// Dimension of the query row.
        got: usize,
    },

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}
