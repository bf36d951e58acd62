//! Regression error metrics.

/// Mean squared error between paired observations and predictions.
///
/// Returns `None` when the slices are empty or have different lengths.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Option<f64> {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return None;
    }
    let sse: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Some(sse / y_true.len() as f64)
}

/// Mean absolute error between paired observations and predictions.
///
/// Returns `None` when the slices are empty or have different lengths.
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Option<f64> {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return None;
    }
    let sae: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();
    Some(sae / y_true.len() as f64)
}
