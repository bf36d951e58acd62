//! Clustering-stability drift check.

use tracing::debug;

use vigil_io::Dataset;
use vigil_knn::{DEFAULT_K_RANGE, best_k};
use vigil_model::Metadata;

use crate::error::DriftError;

/// Compares the best KNN-regression k of two datasets.
///
/// Scans k over 2..=11 (in-sample MSE) independently on each dataset and
/// passes when the winning k values differ by at most `max_distance`.
/// The scan mirrors the baseline pipeline exactly, in-sample evaluation
/// included, so the comparison is like-for-like.
///
/// # Errors
///
/// Propagates dataset lookup and KNN fit errors.
pub fn similar_clustering(
    max_distance: usize,
    new: &Dataset,
    historical: &Dataset,
    metadata: &Metadata,
) -> Result<bool, DriftError> {
    let historical_k = best_k_for(historical, metadata)?;
    let new_k = best_k_for(new, metadata)?;
    let distance = historical_k.abs_diff(new_k);
    debug!(historical_k, new_k, distance, "best-k comparison");
    Ok(distance <= max_distance)
}

fn best_k_for(data: &Dataset, metadata: &Metadata) -> Result<usize, DriftError> {
    let features = data.features(&metadata.feature_columns)?;
    let n_vars = features.ncols();
    let flat: Vec<f64> = features.iter().copied().collect();
    let targets = data.column(&metadata.target)?;
    let best = best_k(&flat, n_vars, targets, DEFAULT_K_RANGE)?;
    Ok(best.k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> Metadata {
        Metadata {
            feature_columns: vec!["x".to_string()],
            target: "y".to_string(),
        }
    }

    fn linear_dataset(n: usize, slope: f64) -> Dataset {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| slope * v).collect();
        Dataset::from_columns([("x", x), ("y", y)]).unwrap()
    }

    #[test]
    fn identical_datasets_pass_at_zero_distance() {
        let data = linear_dataset(40, 2.0);
        assert!(similar_clustering(0, &data, &data.clone(), &metadata()).unwrap());
    }

    #[test]
    fn missing_target_is_error() {
        let data = linear_dataset(30, 1.0);
        let meta = Metadata {
            feature_columns: vec!["x".to_string()],
            target: "missing".to_string(),
        };
        assert!(matches!(
            similar_clustering(0, &data, &data.clone(), &meta),
            Err(DriftError::Io(_))
        ));
    }

    #[test]
    fn empty_dataset_surfaces_knn_error() {
        let empty = Dataset::from_columns([("x", vec![]), ("y", vec![])]).unwrap();
        let data = linear_dataset(30, 1.0);
        assert!(matches!(
            similar_clustering(0, &empty, &data, &metadata()),
            Err(DriftError::Knn(_))
        ));
    }
}
