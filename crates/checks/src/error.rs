//! Error types for the vigil-checks crate.

/// Error type for all fallible operations in the vigil-checks crate.
///
/// Configuration problems are reported before any model call; dataset
/// and model failures are wrapped so a check never turns an error into
/// a `false` verdict.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Returned when a threshold bound is NaN or infinite.
    #[error("{metric} bound must be finite, got {value}")]
    NonFiniteBound {
        /// Metric the bound belongs to.
        metric: &'static str,
        /// The invalid bound.
        value: f64,
    },

    /// Returned when a classification floor is outside [0, 1].
    #[error("{metric} floor must be within [0, 1], got {floor}")]
    FloorOutOfRange {
        /// Metric the floor belongs to.
        metric: &'static str,
        /// The invalid floor.
        floor: f64,
    },

    /// Returned when a regression ceiling is negative.
    #[error("{metric} ceiling must be non-negative, got {ceiling}")]
    NegativeCeiling {
        /// Metric the ceiling belongs to.
        metric: &'static str,
        /// The invalid ceiling.
        ceiling: f64,
    },

    /// Returned when a per-class threshold list is empty.
    #[error("{metric} threshold spec lists no classes")]
    EmptyClassList {
        /// Metric the spec belongs to.
        metric: &'static str,
    },

    /// Returned when a stress spec lists no cases.
    #[error("stress spec lists no cases")]
    EmptyStressCases,

    /// Returned when a stress case has a zero sample size.
    #[error("stress sample size must be >= 1")]
    InvalidSampleSize,

    /// Returned when a stress case has a non-positive time budget.
    #[error("stress max runtime must be positive, got {secs}s")]
    InvalidRuntime {
        /// The invalid budget in seconds.
        secs: f64,
    },

    /// Returned when a ratio threshold is outside [0, 1].
    #[error("ratio threshold must be within [0, 1], got {value}")]
    InvalidRatio {
        /// The invalid threshold.
        value: f64,
    },

    /// Returned when a range check has inverted or non-finite bounds.
    #[error("invalid range [{lower}, {upper}]")]
    InvalidRange {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// Returned when a target column holds a non-integral class label.
    #[error("column '{column}' holds non-integral label {value}")]
    NonIntegralLabel {
        /// Target column name.
        column: String,
        /// Offending value.
        value: f64,
    },

    /// Returned when a check needs rows but the dataset has none.
    #[error("dataset has no rows")]
    EmptyDataset,

    /// Dataset access failed.
    #[error(transparent)]
    Io(#[from] vigil_io::IoError),

    /// Model prediction failed.
    #[error(transparent)]
    Model(#[from] vigil_model::ModelError),
}
