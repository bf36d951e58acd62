//! Per-class classifier floor checks.

use tracing::debug;

use vigil_io::Dataset;
use vigil_model::{Classifier, Metadata};

use crate::error::CheckError;
use crate::thresholds::{ClassifierThresholds, PerClassThresholds};

/// Extracts integer class labels from a dataset column.
///
/// # Errors
///
/// Returns [`CheckError::NonIntegralLabel`] when a value is NaN,
/// infinite, or has a fractional part.
pub(crate) fn class_labels(data: &Dataset, column: &str) -> Result<Vec<i64>, CheckError> {
    data.column(column)?
        .iter()
        .map(|&value| {
            if value.is_finite() && value.fract() == 0.0 {
                Ok(value as i64)
            } else {
                Err(CheckError::NonIntegralLabel {
                    column: column.to_string(),
                    value,
                })
            }
        })
        .collect()
}

fn meets_floors(
    metric: fn(&[i64], &[i64], i64) -> f64,
    metric_name: &'static str,
    model: &dyn Classifier,
    data: &Dataset,
    metadata: &Metadata,
    spec: &PerClassThresholds,
) -> Result<bool, CheckError> {
    spec.validate(metric_name)?;

    let features = data.features(&metadata.feature_columns)?;
    let y_true = class_labels(data, &metadata.target)?;
    let y_pred = model.predict_labels(features.view())?;

    for class in &spec.classes {
        let score = metric(&y_true, &y_pred, class.label);
        if score < class.floor {
            debug!(
                metric = metric_name,
                label = class.label,
                score,
                floor = class.floor,
                "classification floor violated"
            );
            return Ok(false);
        }
    }
    Ok(true)
}

/// Checks per-class precision against the configured floors.
///
/// A class passes when its score is at or above its floor; the check
/// fails as soon as any listed class falls strictly below.
pub fn precision_meets_floors(
    model: &dyn Classifier,
    data: &Dataset,
    metadata: &Metadata,
    spec: &PerClassThresholds,
) -> Result<bool, CheckError> {
    meets_floors(
        vigil_metrics::precision,
        "precision",
        model,
        data,
        metadata,
        spec,
    )
}

/// Checks per-class recall against the configured floors.
pub fn recall_meets_floors(
    model: &dyn Classifier,
    data: &Dataset,
    metadata: &Metadata,
    spec: &PerClassThresholds,
) -> Result<bool, CheckError> {
    meets_floors(vigil_metrics::recall, "recall", model, data, metadata, spec)
}

/// Checks per-class F1 against the configured floors.
pub fn f1_meets_floors(
    model: &dyn Classifier,
    data: &Dataset,
    metadata: &Metadata,
    spec: &PerClassThresholds,
) -> Result<bool, CheckError> {
    meets_floors(vigil_metrics::f1_score, "f1", model, data, metadata, spec)
}

/// Aggregate classifier check: all three metric families are evaluated
/// and all must pass.
pub fn classifier_meets_thresholds(
    model: &dyn Classifier,
    data: &Dataset,
    metadata: &Metadata,
    spec: &ClassifierThresholds,
) -> Result<bool, CheckError> {
    spec.validate()?;
    let precision_ok = precision_meets_floors(model, data, metadata, &spec.precision)?;
    let recall_ok = recall_meets_floors(model, data, metadata, &spec.recall)?;
    let f1_ok = f1_meets_floors(model, data, metadata, &spec.f1)?;
    Ok(precision_ok && recall_ok && f1_ok)
}
