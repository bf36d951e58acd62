//! # vigil
//!
//! Statistical validation checks for machine-learning models and the
//! data feeding them. The workspace splits into focused crates,
//! re-exported here:
//!
//! | Crate | Concern |
//! |-------|---------|
//! | [`series`] | time-series diagnostics, ARIMA fitting and order selection |
//! | [`checks`] | classifier/regressor threshold tests, stress test, data quality |
//! | [`drift`] | new-vs-historical dataset drift checks |
//! | [`metrics`] | classification and regression metrics |
//! | [`knn`] | KNN regression and best-k scanning |
//! | [`model`] | model artifacts, prediction traits, metadata sidecars |
//! | [`io`] | CSV datasets |
//! | [`stats`] | shared statistical primitives |
//!
//! The [`classifier_check`] and [`regression_check`] runners tie the
//! pieces together: load a persisted model, its metadata sidecar, and a
//! CSV dataset, then apply the configured thresholds.
//!
//! ```no_run
//! use std::path::Path;
//! use vigil::config::load_classifier_thresholds;
//!
//! let thresholds = load_classifier_thresholds(Path::new("thresholds.json"))?;
//! let passed = vigil::classifier_check(
//!     Path::new("model.json"),
//!     Path::new("model.meta.json"),
//!     Path::new("holdout.csv"),
//!     &thresholds,
//! )?;
//! assert!(passed);
//! # Ok::<(), vigil::VigilError>(())
//! ```

pub mod config;
mod error;
mod runner;

pub use error::VigilError;
pub use runner::{classifier_check, regression_check, runtime_stress_check};

pub use vigil_checks as checks;
pub use vigil_drift as drift;
pub use vigil_io as io;
pub use vigil_knn as knn;
pub use vigil_metrics as metrics;
pub use vigil_model as model;
pub use vigil_series as series;
pub use vigil_stats as stats;
