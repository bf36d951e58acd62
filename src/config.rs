//! Threshold configuration loading.
//!
//! Threshold specs live in JSON files next to the model artifacts they
//! govern. Every loader validates the parsed spec before returning it,
//! so malformed bounds fail here rather than in the middle of a check.

use std::path::Path;

use vigil_checks::{ClassifierThresholds, RegressionThresholds, StressCase};

use crate::error::VigilError;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, VigilError> {
    let text = std::fs::read_to_string(path).map_err(|e| VigilError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| VigilError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Loads and validates a [`ClassifierThresholds`] spec from JSON.
pub fn load_classifier_thresholds(path: &Path) -> Result<ClassifierThresholds, VigilError> {
    let spec: ClassifierThresholds = read_json(path)?;
    spec.validate()?;
    Ok(spec)
}

/// Loads and validates a [`RegressionThresholds`] spec from JSON.
pub fn load_regression_thresholds(path: &Path) -> Result<RegressionThresholds, VigilError> {
    let spec: RegressionThresholds = read_json(path)?;
    spec.validate()?;
    Ok(spec)
}

/// Loads and validates a list of [`StressCase`]s from JSON.
pub fn load_stress_cases(path: &Path) -> Result<Vec<StressCase>, VigilError> {
    let cases: Vec<StressCase> = read_json(path)?;
    for case in &cases {
        case.validate()?;
    }
    Ok(cases)
}
