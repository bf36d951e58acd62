//! Rank-correlation stability drift check.

use tracing::debug;

use vigil_io::Dataset;
use vigil_stats::spearman;

use crate::error::DriftError;

/// Compares each named column across the two datasets by Spearman rank
/// correlation.
///
/// Fails when any column's correlation p-value exceeds
/// `significance` (the association is not established) or its
/// coefficient falls below `floor` (the association is too weak).
/// Comparing a dataset to itself passes: every column correlates
/// perfectly with p-value 0.
///
/// # Errors
///
/// Returns [`DriftError::LengthMismatch`] when a column is paired
/// against a different number of rows and
/// [`DriftError::InsufficientData`] when fewer than 3 finite pairs
/// remain.
pub fn similar_correlation<S: AsRef<str>>(
    floor: f64,
    new: &Dataset,
    historical: &Dataset,
    columns: &[S],
    significance: f64,
) -> Result<bool, DriftError> {
    if !floor.is_finite() || !(-1.0..=1.0).contains(&floor) {
        return Err(DriftError::InvalidFloor { value: floor });
    }
    if !significance.is_finite() || !(significance > 0.0 && significance <= 1.0) {
        return Err(DriftError::InvalidSignificance {
            value: significance,
        });
    }
    if columns.is_empty() {
        return Err(DriftError::EmptyColumns);
    }

    for column in columns {
        let name = column.as_ref();
        let a = new.column(name)?;
        let b = historical.column(name)?;
        if a.len() != b.len() {
            return Err(DriftError::LengthMismatch {
                column: name.to_string(),
                new: a.len(),
                historical: b.len(),
            });
        }

        let outcome = spearman(a, b).ok_or_else(|| DriftError::InsufficientData {
            column: name.to_string(),
            n: a.len(),
            min: 3,
        })?;

        if outcome.p_value > significance {
            debug!(
                column = name,
                p_value = outcome.p_value,
                significance,
                "correlation not established"
            );
            return Ok(false);
        }
        if outcome.statistic < floor {
            debug!(
                column = name,
                rho = outcome.statistic,
                floor,
                "correlation below floor"
            );
            return Ok(false);
        }
    }

    Ok(true)
}
