//! Prediction-latency stress test.

use std::time::Instant;

use ndarray::Array2;
use rand::Rng;
use tracing::debug;

use vigil_io::Dataset;
use vigil_model::{Metadata, Predictor};

use crate::error::CheckError;
use crate::thresholds::StressCase;

/// Times one prediction call per stress case and compares it to the
/// case's wall-clock budget.
///
/// For each case, `sample_size` rows are drawn with replacement from
/// the feature columns, a single `predict` over the sample is timed,
/// and the check fails when the elapsed time exceeds the budget. The
/// cutoff is observed after the fact, never enforced: a slow
/// prediction runs to completion.
///
/// # Errors
///
/// Returns [`CheckError::EmptyStressCases`] / case validation errors
/// for a malformed spec, [`CheckError::EmptyDataset`] when there are no
/// rows to sample, and any dataset or prediction error.
pub fn prediction_runtime_within<R: Rng>(
    model: &dyn Predictor,
    data: &Dataset,
    metadata: &Metadata,
    cases: &[StressCase],
    rng: &mut R,
) -> Result<bool, CheckError> {
    if cases.is_empty() {
        return Err(CheckError::EmptyStressCases);
    }
    for case in cases {
        case.validate()?;
    }

    let features = data.features(&metadata.feature_columns)?;
    let n_rows = features.nrows();
    if n_rows == 0 {
        return Err(CheckError::EmptyDataset);
    }

    for case in cases {
        let mut sample = Array2::zeros((case.sample_size, features.ncols()));
        for i in 0..case.sample_size {
            let row = rng.random_range(0..n_rows);
            for j in 0..features.ncols() {
                sample[[i, j]] = features[[row, j]];
            }
        }

        let start = Instant::now();
        model.predict(sample.view())?;
        let elapsed = start.elapsed().as_secs_f64();
        debug!(
            sample_size = case.sample_size,
            elapsed,
            budget = case.max_runtime_secs,
            "stress case timed"
        );
        if elapsed > case.max_runtime_secs {
            return Ok(false);
        }
    }

    Ok(true)
}
