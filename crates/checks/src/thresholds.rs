//! Threshold specifications.
//!
//! Each spec is serde-deserializable (JSON on disk) and carries a
//! `validate()` that fails fast on malformed bounds, before any model
//! or dataset work happens.

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Floor for one class of a classification metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassThreshold {
    /// Class label the floor applies to.
    pub label: i64,
    /// Minimum acceptable metric value; exactly at the floor passes.
    pub floor: f64,
}

/// Per-class floors for a single classification metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerClassThresholds {
    /// One floor per class of interest.
    pub classes: Vec<ClassThreshold>,
}

impl PerClassThresholds {
    /// Builds a spec from `(label, floor)` pairs.
    pub fn from_pairs<I: IntoIterator<Item = (i64, f64)>>(pairs: I) -> Self {
        Self {
            classes: pairs
                .into_iter()
                .map(|(label, floor)| ClassThreshold { label, floor })
                .collect(),
        }
    }

    /// Validates the spec for `metric`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::EmptyClassList`] when no classes are
    /// listed, [`CheckError::NonFiniteBound`] for NaN/infinite floors,
    /// and [`CheckError::FloorOutOfRange`] for floors outside [0, 1].
    pub fn validate(&self, metric: &'static str) -> Result<(), CheckError> {
        if self.classes.is_empty() {
            return Err(CheckError::EmptyClassList { metric });
        }
        for class in &self.classes {
            if !class.floor.is_finite() {
                return Err(CheckError::NonFiniteBound {
                    metric,
                    value: class.floor,
                });
            }
            if !(0.0..=1.0).contains(&class.floor) {
                return Err(CheckError::FloorOutOfRange {
                    metric,
                    floor: class.floor,
                });
            }
        }
        Ok(())
    }
}

/// Combined classifier spec: per-class floors for precision, recall,
/// and F1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierThresholds {
    /// Precision floors.
    pub precision: PerClassThresholds,
    /// Recall floors.
    pub recall: PerClassThresholds,
    /// F1 floors.
    pub f1: PerClassThresholds,
}

impl ClassifierThresholds {
    /// Same floors for every metric and class.
    pub fn uniform(labels: &[i64], floor: f64) -> Self {
        let spec = PerClassThresholds::from_pairs(labels.iter().map(|&l| (l, floor)));
        Self {
            precision: spec.clone(),
            recall: spec.clone(),
            f1: spec,
        }
    }

    /// Validates every metric family.
    pub fn validate(&self) -> Result<(), CheckError> {
        self.precision.validate("precision")?;
        self.recall.validate("recall")?;
        self.f1.validate("f1")?;
        Ok(())
    }
}

/// Regression error ceilings; exactly at the ceiling passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegressionThresholds {
    /// Maximum acceptable mean squared error.
    pub max_mse: f64,
    /// Maximum acceptable mean absolute error.
    pub max_mae: f64,
}

impl RegressionThresholds {
    /// Validates both ceilings.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::NonFiniteBound`] for NaN/infinite ceilings
    /// and [`CheckError::NegativeCeiling`] for negative ones.
    pub fn validate(&self) -> Result<(), CheckError> {
        for (metric, ceiling) in [("mse", self.max_mse), ("mae", self.max_mae)] {
            if !ceiling.is_finite() {
                return Err(CheckError::NonFiniteBound {
                    metric,
                    value: ceiling,
                });
            }
            if ceiling < 0.0 {
                return Err(CheckError::NegativeCeiling { metric, ceiling });
            }
        }
        Ok(())
    }
}

/// One case of the prediction-latency stress test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StressCase {
    /// Rows to draw (with replacement) for the timed prediction.
    pub sample_size: usize,
    /// Wall-clock budget for one prediction call, in seconds.
    pub max_runtime_secs: f64,
}

impl StressCase {
    /// Validates this case.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.sample_size == 0 {
            return Err(CheckError::InvalidSampleSize);
        }
        if !self.max_runtime_secs.is_finite() || self.max_runtime_secs <= 0.0 {
            return Err(CheckError::InvalidRuntime {
                secs: self.max_runtime_secs,
            });
        }
        Ok(())
    }
}
