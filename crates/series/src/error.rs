//! Error types for the vigil-series crate.

/// Error type for all fallible operations in the vigil-series crate.
///
/// Covers input validation, numerical issues during model fitting, and
/// search failures in the order-selection grid.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the input series is empty.
    #[error("input series is empty")]
    EmptyData,

    /// Returned when the input series has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input series contains NaN or infinity.
    #[error("input series contains non-finite values")]
    NonFiniteData,

    /// Returned when the (possibly differenced) series has zero variance.
    #[error("input series is constant (zero variance)")]
    ConstantData,

    /// Returned when two paired series have different lengths.
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Returned when a diagnostic regression design is singular.
    #[error("regression design is singular or degenerate")]
    DegenerateRegression,

    /// Returned when the optimizer fails to produce a usable fit.
    #[error("optimisation failed to converge")]
    OptimizationFailed,

    /// Returned when a lag count is zero or too large for the series.
    #[error("invalid lag count {lags} for {n} observations")]
    InvalidLags {
        /// Requested number of lags.
        lags: usize,
        /// Number of observations available.
        n: usize,
    },

    /// Returned when the holdout fraction is outside (0, 1).
    #[error("holdout fraction must be in (0, 1), got {holdout}")]
    InvalidHoldout {
        /// The invalid holdout fraction.
        holdout: f64,
    },

    /// Returned when every candidate order in a search fails to fit.
    #[error("no viable model: all {candidates} candidate orders failed")]
    NoViableModel {
        /// Number of candidate orders attempted.
        candidates: usize,
    },
}
