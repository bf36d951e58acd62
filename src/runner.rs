//! Path-based check runners.
//!
//! Each runner loads the three inputs a check needs — a persisted model
//! artifact, its metadata sidecar, and a CSV dataset — and applies the
//! given thresholds.

use std::path::Path;

use rand::Rng;

use vigil_checks::{
    ClassifierThresholds, RegressionThresholds, StressCase, classifier_meets_thresholds,
    prediction_runtime_within, regressor_meets_thresholds,
};
use vigil_model::{load_artifact, load_metadata};

use crate::error::VigilError;

/// Loads a classifier artifact, metadata, and dataset from disk, then
/// runs the aggregate per-class floor check.
pub fn classifier_check(
    model_path: &Path,
    metadata_path: &Path,
    data_path: &Path,
    thresholds: &ClassifierThresholds,
) -> Result<bool, VigilError> {
    let artifact = load_artifact(model_path)?;
    let metadata = load_metadata(metadata_path)?;
    let data = vigil_io::read_csv(data_path)?;
    Ok(classifier_meets_thresholds(
        &artifact, &data, &metadata, thresholds,
    )?)
}

/// Loads a regression artifact, metadata, and dataset from disk, then
/// runs the MSE/MAE ceiling check.
pub fn regression_check(
    model_path: &Path,
    metadata_path: &Path,
    data_path: &Path,
    thresholds: &RegressionThresholds,
) -> Result<bool, VigilError> {
    let artifact = load_artifact(model_path)?;
    let metadata = load_metadata(metadata_path)?;
    let data = vigil_io::read_csv(data_path)?;
    Ok(regressor_meets_thresholds(
        &artifact, &data, &metadata, thresholds,
    )?)
}

/// Loads any artifact, metadata, and dataset from disk, then times its
/// predictions against the stress cases.
pub fn runtime_stress_check<R: Rng>(
    model_path: &Path,
    metadata_path: &Path,
    data_path: &Path,
    cases: &[StressCase],
    rng: &mut R,
) -> Result<bool, VigilError> {
    let artifact = load_artifact(model_path)?;
    let metadata = load_metadata(metadata_path)?;
    let data = vigil_io::read_csv(data_path)?;
    Ok(prediction_runtime_within(
        &artifact, &data, &metadata, cases, rng,
    )?)
}
