//! Integration tests: boundary semantics across the threshold checks,
//! driven through real model artifacts.

use ndarray::ArrayView2;

use vigil_checks::{
    ClassifierThresholds, PerClassThresholds, RegressionThresholds,
    classifier_meets_thresholds, f1_meets_floors, precision_meets_floors,
    regressor_meets_thresholds,
};
use vigil_io::Dataset;
use vigil_model::{Classifier, Metadata, ModelError, NearestCentroidClassifier, Predictor};

fn metadata() -> Metadata {
    Metadata {
        feature_columns: vec!["x1".to_string(), "x2".to_string()],
        target: "label".to_string(),
    }
}

/// Two separable clusters plus one point of class 1 planted inside the
/// class-0 cluster, so the centroid classifier misses exactly that one.
fn overlapping_dataset() -> Dataset {
    Dataset::from_columns([
        ("x1", vec![0.0, 0.2, 0.4, 0.1, 5.0, 5.2, 5.4, 0.3]),
        ("x2", vec![0.0, 0.1, 0.3, 0.2, 5.0, 5.1, 5.3, 0.1]),
        ("label", vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
    ])
    .unwrap()
}

fn centroid_model() -> NearestCentroidClassifier {
    NearestCentroidClassifier::new(vec![0, 1], vec![vec![0.2, 0.2], vec![5.2, 5.1]]).unwrap()
}

#[test]
fn recall_floor_boundary_through_real_model() {
    // Class 1 has 4 true rows, the planted one is misclassified: recall = 0.75
    let model = centroid_model();
    let data = overlapping_dataset();
    let meta = metadata();

    let mut spec = ClassifierThresholds::uniform(&[0, 1], 0.0);
    spec.recall = PerClassThresholds::from_pairs([(1, 0.75)]);
    assert!(classifier_meets_thresholds(&model, &data, &meta, &spec).unwrap());

    spec.recall = PerClassThresholds::from_pairs([(1, 0.7501)]);
    assert!(!classifier_meets_thresholds(&model, &data, &meta, &spec).unwrap());
}

#[test]
fn precision_reflects_false_positives() {
    // Class 0 absorbs the planted class-1 point: precision(0) = 4/5
    let model = centroid_model();
    let data = overlapping_dataset();
    let meta = metadata();

    let spec = PerClassThresholds::from_pairs([(0, 0.8)]);
    assert!(precision_meets_floors(&model, &data, &meta, &spec).unwrap());

    let spec = PerClassThresholds::from_pairs([(0, 0.81)]);
    assert!(!precision_meets_floors(&model, &data, &meta, &spec).unwrap());
}

#[test]
fn f1_floor_between_precision_and_recall() {
    // Class 1: precision = 1.0, recall = 0.75, F1 = 6/7
    let model = centroid_model();
    let data = overlapping_dataset();
    let meta = metadata();

    let spec = PerClassThresholds::from_pairs([(1, 6.0 / 7.0)]);
    assert!(f1_meets_floors(&model, &data, &meta, &spec).unwrap());

    let spec = PerClassThresholds::from_pairs([(1, 0.87)]);
    assert!(!f1_meets_floors(&model, &data, &meta, &spec).unwrap());
}

#[test]
fn regression_ceilings_with_linear_artifact() {
    use vigil_model::LinearRegressor;

    let data = Dataset::from_columns([
        ("x1", vec![0.0, 1.0, 2.0, 3.0]),
        ("x2", vec![0.0, 0.0, 0.0, 0.0]),
        ("label", vec![1.0, 2.0, 3.0, 4.0]),
    ])
    .unwrap();
    // y = 1 + x1 exactly reproduces the target
    let perfect = LinearRegressor::new(1.0, vec![1.0, 0.0]);
    let spec = RegressionThresholds {
        max_mse: 0.0,
        max_mae: 0.0,
    };
    assert!(regressor_meets_thresholds(&perfect, &data, &metadata(), &spec).unwrap());

    // Shift the intercept by 1: every prediction off by exactly 1
    let shifted = LinearRegressor::new(2.0, vec![1.0, 0.0]);
    let at_ceiling = RegressionThresholds {
        max_mse: 1.0,
        max_mae: 1.0,
    };
    assert!(regressor_meets_thresholds(&shifted, &data, &metadata(), &at_ceiling).unwrap());

    let below_ceiling = RegressionThresholds {
        max_mse: 0.99,
        max_mae: 1.0,
    };
    assert!(!regressor_meets_thresholds(&shifted, &data, &metadata(), &below_ceiling).unwrap());
}

#[test]
fn model_errors_propagate_through_aggregate() {
    struct Exploding;
    impl Classifier for Exploding {
        fn predict_labels(&self, _: ArrayView2<'_, f64>) -> Result<Vec<i64>, ModelError> {
            Err(ModelError::NoCentroids)
        }
    }
    impl Predictor for Exploding {
        fn predict(&self, _: ArrayView2<'_, f64>) -> Result<Vec<f64>, ModelError> {
            Err(ModelError::NoCentroids)
        }
    }

    let spec = ClassifierThresholds::uniform(&[0, 1], 0.5);
    let result =
        classifier_meets_thresholds(&Exploding, &overlapping_dataset(), &metadata(), &spec);
    assert!(result.is_err());
}
