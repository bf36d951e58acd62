//! K-nearest-neighbour regression.

use std::cmp::Ordering;

use crate::error::KnnError;

/// A fitted k-nearest-neighbour regressor.
///
/// Stores the training design as a flat row-major matrix and predicts a
/// query point as the unweighted mean of the targets of its `k_eff`
/// nearest training rows (Euclidean distance), where `k_eff` is `k`
/// clamped to the number of training rows.
#[derive(Debug, Clone)]
pub struct KnnRegressor {
    features: Vec<f64>,
    n_vars: usize,
    targets: Vec<f64>,
    k: usize,
}

impl KnnRegressor {
    /// Fits a regressor on a flat row-major feature matrix
    /// `[n_rows × n_vars]` with one target per row.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`KnnError::InvalidK`] | `k == 0` |
    /// | [`KnnError::EmptyTraining`] | `features` is empty or `n_vars == 0` |
    /// | [`KnnError::FeaturesShapeMismatch`] | `features.len() % n_vars != 0` |
    /// | [`KnnError::TargetLengthMismatch`] | target count differs from row count |
    /// | [`KnnError::NonFiniteInput`] | features or targets contain NaN/infinity |
    pub fn fit(
        features: &[f64],
        n_vars: usize,
        targets: &[f64],
        k: usize,
    ) -> Result<Self, KnnError> {
        if k == 0 {
            return Err(KnnError::InvalidK { k });
        }
        if features.is_empty() || n_vars == 0 {
            return Err(KnnError::EmptyTraining);
        }
        if features.len() % n_vars != 0 {
            return Err(KnnError::FeaturesShapeMismatch {
                len: features.len(),
                n_vars,
            });
        }
        let rows = features.len() / n_vars;
        if targets.len() != rows {
            return Err(KnnError::TargetLengthMismatch {
                targets: targets.len(),
                rows,
            });
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "features" });
        }
        if targets.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "targets" });
        }

        Ok(Self {
            features: features.to_vec(),
            n_vars,
            targets: targets.to_vec(),
            k,
        })
    }

    /// Returns the configured k.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of training rows.
    pub fn n_rows(&self) -> usize {
        self.features.len() / self.n_vars
    }

    /// Returns the number of variables per row.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Predicts the target for a single query row.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::QueryDimensionMismatch`] when the query has
    /// the wrong dimension and [`KnnError::NonFiniteInput`] when it
    /// contains NaN or infinity.
    pub fn predict(&self, row: &[f64]) -> Result<f64, KnnError> {
        if row.len() != self.n_vars {
            return Err(KnnError::QueryDimensionMismatch {
                expected: self.n_vars,
                got: row.len(),
            });
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "query" });
        }

        let n_rows = self.n_rows();
        let k_eff = self.k.min(n_rows);

        let mut pairs: Vec<(f64, usize)> = (0..n_rows)
            .map(|i| {
                let train_row = &self.features[i * self.n_vars..(i + 1) * self.n_vars];
                let d2: f64 = train_row
                    .iter()
                    .zip(row.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                (d2, i)
            })
            .collect();

        pairs.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let sum: f64 = pairs[..k_eff].iter().map(|&(_, i)| self.targets[i]).sum();
        Ok(sum / k_eff as f64)
    }

    /// Predicts targets for a flat row-major batch of query rows.
    pub fn predict_batch(&self, rows: &[f64]) -> Result<Vec<f64>, KnnError> {
        if rows.len() % self.n_vars != 0 {
            return Err(KnnError::FeaturesShapeMismatch {
                len: rows.len(),
                n_vars: self.n_vars,
            });
        }
        rows.chunks(self.n_vars).map(|row| self.predict(row)).collect()
    }

    /// Mean squared error of in-sample predictions over the training rows.
    pub fn in_sample_mse(&self) -> Result<f64, KnnError> {
        let predictions = self.predict_batch(&self.features)?;
        let n = predictions.len() as f64;
        let sse: f64 = predictions
            .iter()
            .zip(self.targets.iter())
            .map(|(p, t)| (p - t) * (p - t))
            .sum();
        Ok(sse / n)
    }
}
