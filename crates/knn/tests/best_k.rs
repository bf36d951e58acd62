//! Integration tests for the best-k scan.

use vigil_knn::{BestK, DEFAULT_K_RANGE, KnnError, KnnRegressor, best_k};

/// Two well-separated clusters in 2D with distinct targets per cluster.
fn clustered() -> (Vec<f64>, Vec<f64>) {
    let mut features = Vec::new();
    let mut targets = Vec::new();
    for i in 0..10 {
        features.push(i as f64 * 0.1);
        features.push(i as f64 * 0.1);
        targets.push(1.0);
    }
    for i in 0..10 {
        features.push(10.0 + i as f64 * 0.1);
        features.push(10.0 + i as f64 * 0.1);
        targets.push(5.0);
    }
    (features, targets)
}

#[test]
fn scan_is_deterministic() {
    let (features, targets) = clustered();
    let a = best_k(&features, 2, &targets, DEFAULT_K_RANGE).unwrap();
    let b = best_k(&features, 2, &targets, DEFAULT_K_RANGE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn clustered_targets_score_zero() {
    // Within each 10-point cluster all targets agree, so any k <= 10 that
    // stays inside the cluster predicts perfectly.
    let (features, targets) = clustered();
    let BestK { k, mse } = best_k(&features, 2, &targets, DEFAULT_K_RANGE).unwrap();
    assert!(k >= 2);
    assert!(mse.abs() < 1e-12, "mse = {mse}");
}

#[test]
fn same_data_same_best_k() {
    // The drift check's contract: identical datasets produce identical k.
    let (features, targets) = clustered();
    let first = best_k(&features, 2, &targets, DEFAULT_K_RANGE).unwrap();
    let second = best_k(&features.clone(), 2, &targets.clone(), DEFAULT_K_RANGE).unwrap();
    assert_eq!(first.k, second.k);
}

#[test]
fn regressor_round_trip_through_scan_range() {
    let (features, targets) = clustered();
    for k in DEFAULT_K_RANGE {
        let model = KnnRegressor::fit(&features, 2, &targets, k).unwrap();
        assert_eq!(model.k(), k);
        assert_eq!(model.n_rows(), 20);
        let mse = model.in_sample_mse().unwrap();
        assert!(mse.is_finite());
    }
}

#[test]
fn scan_surfaces_fit_errors() {
    let result = best_k(&[1.0, 2.0, 3.0], 2, &[1.0], 2..=3);
    assert!(matches!(result, Err(KnnError::FeaturesShapeMismatch { .. })));
}
