//! Distributional-similarity drift check.

use std::cmp::Ordering;

use tracing::debug;

use vigil_io::Dataset;
use vigil_stats::{TestOutcome, kolmogorov_sf};

use crate::error::DriftError;

/// Two-sample Kolmogorov-Smirnov test.
///
/// The statistic is the supremum distance between the empirical CDFs;
/// the p-value uses the asymptotic Kolmogorov distribution at
/// `D · sqrt(n·m / (n+m))`. Non-finite values are dropped before
/// comparison. Returns `None` when either sample has no finite values.
pub fn ks_2sample(a: &[f64], b: &[f64]) -> Option<TestOutcome> {
    let mut xs: Vec<f64> = a.iter().copied().filter(|v| v.is_finite()).collect();
    let mut ys: Vec<f64> = b.iter().copied().filter(|v| v.is_finite()).collect();
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    xs.sort_by(|p, q| p.partial_cmp(q).unwrap_or(Ordering::Equal));
    ys.sort_by(|p, q| p.partial_cmp(q).unwrap_or(Ordering::Equal));

    let n = xs.len();
    let m = ys.len();
    let mut i = 0;
    let mut j = 0;
    let mut d_max = 0.0f64;
    while i < n && j < m {
        let x = xs[i];
        let y = ys[j];
        let v = x.min(y);
        while i < n && xs[i] <= v {
            i += 1;
        }
        while j < m && ys[j] <= v {
            j += 1;
        }
        let diff = (i as f64 / n as f64 - j as f64 / m as f64).abs();
        if diff > d_max {
            d_max = diff;
        }
    }

    let nf = n as f64;
    let mf = m as f64;
    let effective = (nf * mf / (nf + mf)).sqrt();
    let p_value = kolmogorov_sf(d_max * effective);
    Some(TestOutcome::new(d_max, p_value))
}

/// Compares each named column's distribution across the two datasets.
///
/// Runs the two-sample Kolmogorov-Smirnov test per column and fails
/// when any column's p-value falls below `significance` — the samples
/// then differ more than chance allows. Each column is judged by its
/// own test result. Comparing a dataset to itself passes: D is 0 and
/// the p-value 1.
///
/// # Errors
///
/// Returns [`DriftError::InsufficientData`] for columns with no usable
/// rows, plus the usual parameter and lookup errors.
pub fn similar_distribution<S: AsRef<str>>(
    new: &Dataset,
    historical: &Dataset,
    columns: &[S],
    significance: f64,
) -> Result<bool, DriftError> {
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

        let outcome = ks_2sample(a, b).ok_or_else(|| DriftError::InsufficientData {
            column: name.to_string(),
            n: a.iter().filter(|v| v.is_finite()).count(),
            min: 1,
        })?;

        if outcome.p_value < significance {
            debug!(
                column = name,
                statistic = outcome.statistic,
                p_value = outcome.p_value,
                "distribution shift detected"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ks_identical_samples() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let outcome = ks_2sample(&a, &a).unwrap();
        assert_relative_eq!(outcome.statistic, 0.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ks_disjoint_samples() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let b = [101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0, 108.0, 109.0, 110.0];
        let outcome = ks_2sample(&a, &b).unwrap();
        assert_relative_eq!(outcome.statistic, 1.0, epsilon = 1e-12);
        assert!(outcome.p_value < 0.01);
    }

    #[test]
    fn ks_hand_computed_statistic() {
        // a = [1, 2], b = [2, 3]: max CDF gap at v in [1,2): |1/2 - 0| = 0.5
        let outcome = ks_2sample(&[1.0, 2.0], &[2.0, 3.0]).unwrap();
        assert_relative_eq!(outcome.statistic, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn ks_ignores_non_finite() {
        let a = [1.0, f64::NAN, 2.0, 3.0];
        let b = [1.0, 2.0, 3.0, f64::INFINITY];
        let outcome = ks_2sample(&a, &b).unwrap();
        assert_relative_eq!(outcome.statistic, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ks_empty_is_none() {
        assert!(ks_2sample(&[], &[1.0]).is_none());
        assert!(ks_2sample(&[f64::NAN], &[1.0]).is_none());
    }

    #[test]
    fn self_comparison_passes() {
        let data = Dataset::from_columns([
            ("a", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("b", vec![9.0, 8.0, 7.0, 6.0, 5.0]),
        ])
        .unwrap();
        let ok = similar_distribution(&data, &data.clone(), &["a", "b"], 0.05).unwrap();
        assert!(ok);
    }

    #[test]
    fn shifted_distribution_fails() {
        let historical: Vec<f64> = (0..100).map(|i| (i % 10) as f64).collect();
        let new: Vec<f64> = historical.iter().map(|v| v + 50.0).collect();
        let h = Dataset::from_columns([("v", historical)]).unwrap();
        let n = Dataset::from_columns([("v", new)]).unwrap();
        let ok = similar_distribution(&n, &h, &["v"], 0.05).unwrap();
        assert!(!ok);
    }

    #[test]
    fn each_column_judged_by_its_own_result() {
        // First column identical, second shifted: the second column's
        // own result must drive the failure.
        let historical = Dataset::from_columns([
            ("same", (0..60).map(|i| (i % 6) as f64).collect::<Vec<_>>()),
            ("moved", (0..60).map(|i| (i % 6) as f64).collect::<Vec<_>>()),
        ])
        .unwrap();
        let new = Dataset::from_columns([
            ("same", (0..60).map(|i| (i % 6) as f64).collect::<Vec<_>>()),
            ("moved", (0..60).map(|i| (i % 6) as f64 + 40.0).collect::<Vec<_>>()),
        ])
        .unwrap();

        assert!(similar_distribution(&new, &historical, &["same"], 0.05).unwrap());
        assert!(!similar_distribution(&new, &historical, &["same", "moved"], 0.05).unwrap());
    }

    #[test]
    fn parameter_validation() {
        let data = Dataset::from_columns([("v", vec![1.0, 2.0])]).unwrap();
        assert!(matches!(
            similar_distribution(&data, &data.clone(), &["v"], 0.0),
            Err(DriftError::InvalidSignificance { .. })
        ));
        let empty: &[&str] = &[];
        assert!(matches!(
            similar_distribution(&data, &data.clone(), empty, 0.05),
            Err(DriftError::EmptyColumns)
        ));
    }

    #[test]
    fn all_missing_column_is_error() {
        let a = Dataset::from_columns([("v", vec![f64::NAN, f64::NAN])]).unwrap();
        let b = Dataset::from_columns([("v", vec![1.0, 2.0])]).unwrap();
        assert!(matches!(
            similar_distribution(&a, &b, &["v"], 0.05),
            Err(DriftError::InsufficientData { .. })
        ));
    }
}
