//! BDS independence test.

use statrs::distribution::{ContinuousCDF, Normal};

use vigil_stats::TestOutcome;

use crate::error::SeriesError;
use crate::stationarity::validate;

/// BDS test for serial independence at embedding dimension 2.
///
/// Null hypothesis: the observations are independent and identically
/// distributed. Compares the dimension-2 correlation integral against
/// the square of the dimension-1 integral at radius `1.5 · sd`; under
/// the null the scaled difference is asymptotically standard normal.
///
/// # Errors
///
/// Returns the usual validation errors, plus
/// [`SeriesError::ConstantData`] when the variance estimate of the
/// statistic degenerates to zero.
pub fn bds(series: &[f64]) -> Result<TestOutcome, SeriesError> {
    validate(series, 20)?;
    let n = series.len();
    let nf = n as f64;

    let epsilon = 1.5 * vigil_stats::sd(series);

    // Pairwise proximity indicator, dimension 1
    let within = |a: f64, b: f64| (a - b).abs() < epsilon;

    let mut close_pairs = 0usize;
    let mut per_point = vec![0usize; n];
    for s in 0..n {
        for t in (s + 1)..n {
            if within(series[s], series[t]) {
                close_pairs += 1;
                per_point[s] += 1;
                per_point[t] += 1;
            }
        }
    }
    let c1 = 2.0 * close_pairs as f64 / (nf * (nf - 1.0));

    // Correlation integral at embedding dimension 2 (max norm)
    let m = n - 1;
    let mf = m as f64;
    let mut close_embedded = 0usize;
    for s in 0..m {
        for t in (s + 1)..m {
            if within(series[s], series[t]) && within(series[s + 1], series[t + 1]) {
                close_embedded += 1;
            }
        }
    }
    let c2 = 2.0 * close_embedded as f64 / (mf * (mf - 1.0));

    // k = E[(fraction of points near t)^2]
    let k = per_point
        .iter()
        .map(|&count| {
            let frac = count as f64 / (nf - 1.0);
            frac * frac
        })
        .sum::<f64>()
        / nf;

    // Asymptotic variance for m = 2:
    // sigma^2 = 4 (k^2 + 2 k c^2 + (m-1)^2 c^{2m} - m^2 k c^{2m-2})
    let c_sq = c1 * c1;
    let var = 4.0 * (k * k + 2.0 * k * c_sq + c_sq * c_sq - 4.0 * k * c_sq);
    if !(var > 0.0) {
        return Err(SeriesError::ConstantData);
    }

    let statistic = mf.sqrt() * (c2 - c_sq) / var.sqrt();
    let normal = Normal::new(0.0, 1.0).map_err(|_| SeriesError::OptimizationFailed)?;
    let p_value = (2.0 * (1.0 - normal.cdf(statistic.abs()))).clamp(0.0, 1.0);

    Ok(TestOutcome::new(statistic, p_value))
}
