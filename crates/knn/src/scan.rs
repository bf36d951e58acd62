//! Best-k scanning by in-sample mean squared error.

use std::ops::RangeInclusive;

use crate::error::KnnError;
use crate::regressor::KnnRegressor;

/// Result of a best-k scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestK {
    /// Neighbour count with the lowest in-sample MSE.
    pub k: usize,
    /// The winning in-sample MSE.
    pub mse: f64,
}

/// Scans `k_range`, fitting a [`KnnRegressor`] for each k and scoring it
/// by in-sample MSE (predictions on the training rows themselves).
/// Returns the k with the lowest error; ties keep the smaller k.
///
/// The in-sample scoring mirrors the baseline pipeline this check
/// validates against; it is not a generalization estimate.
///
/// # Errors
///
/// Returns [`KnnError::EmptyKRange`] when the range is empty, plus any
/// fit error from [`KnnRegressor::fit`].
pub fn best_k(
    features: &[f64],
    n_vars: usize,
    targets: &[f64],
    k_range: RangeInclusive<usize>,
) -> Result<BestK, KnnError> {
    let (start, end) = (*k_range.start(), *k_range.end());
    if k_range.is_empty() {
        return Err(KnnError::EmptyKRange { start, end });
    }

    let mut best: Option<BestK> = None;
    for k in k_range {
        let model = KnnRegressor::fit(features, n_vars, targets, k)?;
        let mse = model.in_sample_mse()?;
        if best.is_none_or(|b| mse < b.mse) {
            best = Some(BestK { k, mse });
        }
    }

    best.ok_or(KnnError::EmptyKRange { start, end })
}
