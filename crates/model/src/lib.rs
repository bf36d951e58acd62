//! # vigil-model
//!
//! The model side of a validation check: traits for anything that can
//! predict ([`Predictor`], [`Classifier`]), two concrete persisted
//! artifact kinds, and the JSON metadata sidecar naming a model's
//! feature columns and target.
//!
//! Artifacts and sidecars are plain JSON on disk; [`load_artifact`] and
//! [`load_metadata`] are the only deserialization entry points.

mod artifact;
mod error;
mod metadata;

pub use artifact::{Artifact, LinearRegressor, NearestCentroidClassifier, load_artifact};
pub use error::ModelError;
pub use metadata::{Metadata, load_metadata};

use ndarray::ArrayView2;

/// Anything that maps a feature matrix to one numeric prediction per row.
pub trait Predictor {
    /// Predicts one value per row of `features`.
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, ModelError>;
}

/// Anything that maps a feature matrix to one class label per row.
pub trait Classifier {
    /// Predicts one integer label per row of `features`.
    fn predict_labels(&self, features: ArrayView2<'_, f64>) -> Result<Vec<i64>, ModelError>;
}
