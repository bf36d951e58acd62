//! Regression error ceiling checks.

use tracing::debug;

use vigil_io::Dataset;
use vigil_model::{Metadata, Predictor};

use crate::error::CheckError;
use crate::thresholds::RegressionThresholds;

fn predictions(
    model: &dyn Predictor,
    data: &Dataset,
    metadata: &Metadata,
) -> Result<(Vec<f64>, Vec<f64>), CheckError> {
    let features = data.features(&metadata.feature_columns)?;
    let y_true = data.column(&metadata.target)?.to_vec();
    let y_pred = model.predict(features.view())?;
    Ok((y_true, y_pred))
}

/// Checks the mean squared error against `ceiling`; exactly at the
/// ceiling passes, strictly above fails.
pub fn mse_within_ceiling(
    model: &dyn Predictor,
    data: &Dataset,
    metadata: &Metadata,
    ceiling: f64,
) -> Result<bool, CheckError> {
    if !ceiling.is_finite() {
        return Err(CheckError::NonFiniteBound {
            metric: "mse",
            value: ceiling,
        });
    }
    if ceiling < 0.0 {
        return Err(CheckError::NegativeCeiling {
            metric: "mse",
            ceiling,
        });
    }

    let (y_true, y_pred) = predictions(model, data, metadata)?;
    let mse =
        vigil_metrics::mean_squared_error(&y_true, &y_pred).ok_or(CheckError::EmptyDataset)?;
    debug!(mse, ceiling, "mse ceiling check");
    Ok(mse <= ceiling)
}

/// Checks the mean absolute error against `ceiling`; exactly at the
/// ceiling passes, strictly above fails.
pub fn mae_within_ceiling(
    model: &dyn Predictor,
    data: &Dataset,
    metadata: &Metadata,
    ceiling: f64,
) -> Result<bool, CheckError> {
    if !ceiling.is_finite() {
        return Err(CheckError::NonFiniteBound {
            metric: "mae",
            value: ceiling,
        });
    }
    if ceiling < 0.0 {
        return Err(CheckError::NegativeCeiling {
            metric: "mae",
            ceiling,
        });
    }

    let (y_true, y_pred) = predictions(model, data, metadata)?;
    let mae =
        vigil_metrics::mean_absolute_error(&y_true, &y_pred).ok_or(CheckError::EmptyDataset)?;
    debug!(mae, ceiling, "mae ceiling check");
    Ok(mae <= ceiling)
}

/// Aggregate regression check: both ceilings must hold.
pub fn regressor_meets_thresholds(
    model: &dyn Predictor,
    data: &Dataset,
    metadata: &Metadata,
    spec: &RegressionThresholds,
) -> Result<bool, CheckError> {
    spec.validate()?;
    let mse_ok = mse_within_ceiling(model, data, metadata, spec.max_mse)?;
    let mae_ok = mae_within_ceiling(model, data, metadata, spec.max_mae)?;
    Ok(mse_ok && mae_ok)
}
