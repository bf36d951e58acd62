//! # vigil-checks
//!
//! Pass/fail validation checks for trained models and the datasets
//! feeding them: per-class classification floors, regression error
//! ceilings, a prediction-latency stress test, and column-level
//! data-quality predicates.
//!
//! Every check is a pure function `model/data + spec -> bool`. Boundary
//! semantics are uniform: floors and ceilings are inclusive (a metric
//! exactly at its bound passes). Errors from the underlying model or
//! dataset are never converted into `false` — they propagate.

mod classifier;
mod error;
mod quality;
mod regression;
mod stress;
mod thresholds;

pub use classifier::{
    classifier_meets_thresholds, f1_meets_floors, precision_meets_floors, recall_meets_floors,
};
pub use error::CheckError;
pub use quality::{
    completeness_ratio, filter_less_than, filter_non_negative, has_completeness, has_range,
    has_uniqueness, in_range_ratio, is_complete, is_less_than, is_non_negative, is_unique,
    uniqueness_ratio,
};
pub use regression::{mae_within_ceiling, mse_within_ceiling, regressor_meets_thresholds};
pub use stress::prediction_runtime_within;
pub use thresholds::{
    ClassThreshold, ClassifierThresholds, PerClassThresholds, RegressionThresholds, StressCase,
};
