//! Autocorrelation function and the Ljung-Box portmanteau test.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::outcome::TestOutcome;

/// Sample autocorrelations at lags `1..=nlags`.
///
/// Uses the biased (1/n) autocovariance estimator, normalized by the
/// lag-0 autocovariance. Returns `None` when the series has fewer than
/// two observations, contains non-finite values, or has zero variance.
pub fn acf(series: &[f64], nlags: usize) -> Option<Vec<f64>> {
    let n = series.len();
    if n < 2 || series.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let nf = n as f64;
    let mean = series.iter().sum::<f64>() / nf;
    let c0 = series.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / nf;
    if c0 <= 0.0 {
        return None;
    }

    let mut out = Vec::with_capacity(nlags);
    for lag in 1..=nlags {
        if lag >= n {
            out.push(0.0);
            continue;
        }
        let cov = series[lag..]
            .iter()
            .zip(series.iter())
            .map(|(&a, &b)| (a - mean) * (b - mean))
            .sum::<f64>()
            / nf;
        out.push(cov / c0);
    }

    Some(out)
}

/// Ljung-Box portmanteau test for autocorrelation up to `lags`.
///
/// Q = n(n+2) Σₖ rₖ² / (n − k), referred to a χ²(lags) distribution.
///
/// Returns `None` when `lags` is zero, the series is no longer than
/// `lags`, or the autocorrelations cannot be computed.
pub fn ljung_box(series: &[f64], lags: usize) -> Option<TestOutcome> {
    let n = series.len();
    if lags == 0 || n <= lags {
        return None;
    }

    let r = acf(series, lags)?;
    let nf = n as f64;
    let q = nf
        * (nf + 2.0)
        * r.iter()
            .enumerate()
            .map(|(k, &rk)| rk * rk / (nf - (k + 1) as f64))
            .sum::<f64>();

    let dist = ChiSquared::new(lags as f64).ok()?;
    let p_value = (1.0 - dist.cdf(q)).clamp(0.0, 1.0);
    Some(TestOutcome::new(q, p_value))
}
