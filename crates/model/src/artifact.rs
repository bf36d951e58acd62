//! Persisted model artifacts.

use std::path::Path;

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::{Classifier, Predictor};

/// A linear regression artifact: `y = intercept + x · weights`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    intercept: f64,
    weights: Vec<f64>,
}

impl LinearRegressor {
    /// Creates a linear regressor from its coefficients.
    pub fn new(intercept: f64, weights: Vec<f64>) -> Self {
        Self { intercept, weights }
    }

    /// Returns the intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the per-feature weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Predictor for LinearRegressor {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, ModelError> {
        if features.ncols() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                got: features.ncols(),
            });
        }
        Ok(features
            .rows()
            .into_iter()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(self.weights.iter())
                        .map(|(x, w)| x * w)
                        .sum::<f64>()
            })
            .collect())
    }
}

/// A nearest-centroid classifier: each row is assigned the label of the
/// closest centroid (squared Euclidean distance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestCentroidClassifier {
    labels: Vec<i64>,
    centroids: Vec<Vec<f64>>,
}

impl NearestCentroidClassifier {
    /// Creates a classifier from parallel label/centroid lists.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoCentroids`] when the lists are empty and
    /// [`ModelError::DimensionMismatch`] when they disagree in length or
    /// the centroids have inconsistent dimensions.
    pub fn new(labels: Vec<i64>, centroids: Vec<Vec<f64>>) -> Result<Self, ModelError> {
        if labels.is_empty() || centroids.is_empty() {
            return Err(ModelError::NoCentroids);
        }
        if labels.len() != centroids.len() {
            return Err(ModelError::DimensionMismatch {
                expected: labels.len(),
                got: centroids.len(),
            });
        }
        let dim = centroids[0].len();
        for centroid in &centroids {
            if centroid.len() != dim {
                return Err(ModelError::DimensionMismatch {
                    expected: dim,
                    got: centroid.len(),
                });
            }
        }
        Ok(Self { labels, centroids })
    }

    /// Returns the class labels.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    fn dim(&self) -> usize {
        self.centroids[0].len()
    }
}

impl Classifier for NearestCentroidClassifier {
    fn predict_labels(&self, features: ArrayView2<'_, f64>) -> Result<Vec<i64>, ModelError> {
        if features.ncols() != self.dim() {
            return Err(ModelError::DimensionMismatch {
                expected: self.dim(),
                got: features.ncols(),
            });
        }
        Ok(features
            .rows()
            .into_iter()
            .map(|row| {
                let mut best_label = self.labels[0];
                let mut best_d2 = f64::INFINITY;
                for (label, centroid) in self.labels.iter().zip(self.centroids.iter()) {
                    let d2: f64 = row
                        .iter()
                        .zip(centroid.iter())
                        .map(|(a, b)| (a - b) * (a - b))
                        .sum();
                    if d2 < best_d2 {
                        best_d2 = d2;
                        best_label = *label;
                    }
                }
                best_label
            })
            .collect())
    }
}

impl Predictor for NearestCentroidClassifier {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, ModelError> {
        Ok(self
            .predict_labels(features)?
            .into_iter()
            .map(|label| label as f64)
            .collect())
    }
}

/// A persisted model artifact, tagged by kind in its JSON form:
/// `{"kind": "linear", ...}` or `{"kind": "nearest_centroid", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    /// Linear regression model.
    Linear(LinearRegressor),
    /// Nearest-centroid classification model.
    NearestCentroid(NearestCentroidClassifier),
}

impl Predictor for Artifact {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, ModelError> {
        match self {
            Artifact::Linear(model) => model.predict(features),
            Artifact::NearestCentroid(model) => model.predict(features),
        }
    }
}

impl Classifier for Artifact {
    fn predict_labels(&self, features: ArrayView2<'_, f64>) -> Result<Vec<i64>, ModelError> {
        match self {
            Artifact::Linear(_) => Err(ModelError::NotAClassifier { kind: "linear" }),
            Artifact::NearestCentroid(model) => model.predict_labels(features),
        }
    }
}

/// Loads a persisted [`Artifact`] from a JSON file.
///
/// # Errors
///
/// Returns [`ModelError::FileNotFound`] for a missing path and
/// [`ModelError::Json`] for malformed contents.
pub fn load_artifact(path: &Path) -> Result<Artifact, ModelError> {
    let text = read_file(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub(crate) fn read_file(path: &Path) -> Result<String, ModelError> {
    if !path.exists() {
        return Err(ModelError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| ModelError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
