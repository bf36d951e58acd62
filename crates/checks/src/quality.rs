//! Column-level data-quality checks.
//!
//! Every check is either a `bool` predicate or a `filter_*` operation
//! returning the indices of matching rows — never both at once, so the
//! contracts stay type-safe. Ratio thresholds are floors: a ratio at or
//! above the threshold passes.

use std::collections::BTreeSet;

use vigil_io::Dataset;

use crate::error::CheckError;

/// Fraction of non-missing values in a column.
///
/// # Errors
///
/// Returns [`CheckError::EmptyDataset`] for a zero-row column and
/// dataset lookup errors for a missing column.
pub fn completeness_ratio(data: &Dataset, column: &str) -> Result<f64, CheckError> {
    let values = data.column(column)?;
    if values.is_empty() {
        return Err(CheckError::EmptyDataset);
    }
    let present = values.iter().filter(|v| !v.is_nan()).count();
    Ok(present as f64 / values.len() as f64)
}

/// True when the column has no missing values.
pub fn is_complete(data: &Dataset, column: &str) -> Result<bool, CheckError> {
    Ok(completeness_ratio(data, column)? == 1.0)
}

/// True when the column's completeness ratio is at or above `threshold`.
pub fn has_completeness(data: &Dataset, column: &str, threshold: f64) -> Result<bool, CheckError> {
    validate_ratio(threshold)?;
    Ok(completeness_ratio(data, column)? >= threshold)
}

/// Fraction of distinct values in a column. Missing values count as one
/// shared distinct value.
pub fn uniqueness_ratio(data: &Dataset, column: &str) -> Result<f64, CheckError> {
    let values = data.column(column)?;
    if values.is_empty() {
        return Err(CheckError::EmptyDataset);
    }
    let distinct: BTreeSet<u64> = values
        .iter()
        .map(|v| if v.is_nan() { f64::NAN.to_bits() } else { v.to_bits() })
        .collect();
    Ok(distinct.len() as f64 / values.len() as f64)
}

/// True when every value in the column is distinct.
pub fn is_unique(data: &Dataset, column: &str) -> Result<bool, CheckError> {
    Ok(uniqueness_ratio(data, column)? == 1.0)
}

/// True when the column's uniqueness ratio is at or above `threshold`.
pub fn has_uniqueness(data: &Dataset, column: &str, threshold: f64) -> Result<bool, CheckError> {
    validate_ratio(threshold)?;
    Ok(uniqueness_ratio(data, column)? >= threshold)
}

/// Fraction of values inside `[lower, upper]`. Missing values count
/// against the ratio.
pub fn in_range_ratio(
    data: &Dataset,
    column: &str,
    lower: f64,
    upper: f64,
) -> Result<f64, CheckError> {
    if !lower.is_finite() || !upper.is_finite() || lower > upper {
        return Err(CheckError::InvalidRange { lower, upper });
    }
    let values = data.column(column)?;
    if values.is_empty() {
        return Err(CheckError::EmptyDataset);
    }
    let inside = values
        .iter()
        .filter(|v| **v >= lower && **v <= upper)
        .count();
    Ok(inside as f64 / values.len() as f64)
}

/// True when the in-range ratio is at or above `threshold`.
pub fn has_range(
    data: &Dataset,
    column: &str,
    lower: f64,
    upper: f64,
    threshold: f64,
) -> Result<bool, CheckError> {
    validate_ratio(threshold)?;
    Ok(in_range_ratio(data, column, lower, upper)? >= threshold)
}

/// True when every value in the column is present and non-negative.
pub fn is_non_negative(data: &Dataset, column: &str) -> Result<bool, CheckError> {
    let values = data.column(column)?;
    Ok(values.iter().all(|&v| v >= 0.0))
}

/// Indices of rows whose value in `column` is non-negative.
pub fn filter_non_negative(data: &Dataset, column: &str) -> Result<Vec<usize>, CheckError> {
    let values = data.column(column)?;
    Ok(values
        .iter()
        .enumerate()
        .filter(|(_, &v)| v >= 0.0)
        .map(|(i, _)| i)
        .collect())
}

/// True when `left < right` holds on every row. Rows with a missing
/// member fail the comparison.
pub fn is_less_than(data: &Dataset, left: &str, right: &str) -> Result<bool, CheckError> {
    let a = data.column(left)?;
    let b = data.column(right)?;
    Ok(a.iter().zip(b.iter()).all(|(x, y)| x < y))
}

/// Indices of rows where `left < right`.
pub fn filter_less_than(
    data: &Dataset,
    left: &str,
    right: &str,
) -> Result<Vec<usize>, CheckError> {
    let a = data.column(left)?;
    let b = data.column(right)?;
    Ok(a.iter()
        .zip(b.iter())
        .enumerate()
        .filter(|(_, (x, y))| x < y)
        .map(|(i, _)| i)
        .collect())
}

fn validate_ratio(threshold: f64) -> Result<(), CheckError> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(CheckError::InvalidRatio { value: threshold });
    }
    Ok(())
}
