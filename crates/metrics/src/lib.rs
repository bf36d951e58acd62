//! # vigil-metrics
//!
//! Performance metrics consumed by the threshold checks: one-vs-rest
//! classification scores over integer labels and the usual regression
//! error measures.

mod classification;
mod regression;

pub use classification::{f1_score, precision, recall};
pub use regression::{mean_absolute_error, mean_squared_error};
