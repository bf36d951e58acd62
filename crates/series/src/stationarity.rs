//! Unit-root and stationarity tests: ADF, KPSS, Engle-Granger.
//!
//! P-values come from linear interpolation over the asymptotic
//! critical-value surfaces of the respective null distributions,
//! clamped at the table edges. That is coarse but monotone, which is
//! all a threshold-style validation check needs.

use ndarray::Array2;
use vigil_stats::{TestOutcome, ols};

use crate::error::SeriesError;

/// Asymptotic quantiles of the Dickey-Fuller tau distribution
/// (regression with constant), `(statistic, p)` ascending in statistic.
const ADF_TABLE: &[(f64, f64)] = &[
    (-3.43, 0.01),
    (-3.12, 0.025),
    (-2.86, 0.05),
    (-2.57, 0.10),
    (-1.57, 0.50),
    (-0.44, 0.90),
    (-0.07, 0.95),
    (0.23, 0.975),
    (0.60, 0.99),
];

/// Asymptotic quantiles of the KPSS level-stationarity statistic.
const KPSS_TABLE: &[(f64, f64)] = &[
    (0.347, 0.10),
    (0.463, 0.05),
    (0.574, 0.025),
    (0.739, 0.01),
];

/// Approximate asymptotic quantiles of the Engle-Granger tau
/// distribution for two series with a constant in the cointegrating
/// regression.
const EG_TABLE: &[(f64, f64)] = &[
    (-3.90, 0.01),
    (-3.59, 0.025),
    (-3.34, 0.05),
    (-3.04, 0.10),
    (-1.95, 0.50),
    (-0.95, 0.90),
    (-0.60, 0.95),
    (0.00, 0.99),
];

/// Augmented Dickey-Fuller unit-root test (constant, no trend).
///
/// Null hypothesis: the series has a unit root (is non-stationary).
/// Regresses the first difference on a constant, the lagged level, and
/// Schwert-rule lagged differences; the statistic is the t-ratio of the
/// lagged level.
///
/// # Errors
///
/// Returns [`SeriesError::InsufficientData`] below 15 observations,
/// [`SeriesError::NonFiniteData`] / [`SeriesError::ConstantData`] for
/// degenerate input, and [`SeriesError::DegenerateRegression`] when the
/// design is singular.
pub fn ad_fuller(series: &[f64]) -> Result<TestOutcome, SeriesError> {
    validate(series, 15)?;
    let n = series.len();

    let maxlag = schwert_lag(n).min((n - 1) / 3);
    let dy: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let rows = dy.len() - maxlag;
    let k = maxlag + 2;
    if rows <= k {
        return Err(SeriesError::InsufficientData { n, min: k + maxlag + 2 });
    }

    let mut y = Vec::with_capacity(rows);
    let mut x = Array2::zeros((rows, k));
    for t in maxlag..dy.len() {
        let r = t - maxlag;
        y.push(dy[t]);
        x[[r, 0]] = 1.0;
        x[[r, 1]] = series[t];
        for lag in 1..=maxlag {
            x[[r, 1 + lag]] = dy[t - lag];
        }
    }

    let fit = ols(&y, &x).ok_or(SeriesError::DegenerateRegression)?;
    let t_stat = fit.t_statistic(1).ok_or(SeriesError::DegenerateRegression)?;
    let p_value = interpolate_pvalue(t_stat, ADF_TABLE, 0.001, 0.999);
    Ok(TestOutcome::new(t_stat, p_value))
}

/// KPSS test for level stationarity.
///
/// Null hypothesis: the series is stationary around a constant — the
/// opposite orientation to [`ad_fuller`]. The statistic is the scaled
/// sum of squared partial sums of the demeaned series over a
/// Newey-West (Bartlett) long-run variance. The p-value is clamped to
/// the tabulated range [0.01, 0.10].
pub fn kpss(series: &[f64]) -> Result<TestOutcome, SeriesError> {
    validate(series, 12)?;
    let n = series.len();
    let nf = n as f64;

    let mean = series.iter().sum::<f64>() / nf;
    let demeaned: Vec<f64> = series.iter().map(|v| v - mean).collect();

    let mut partial = 0.0;
    let mut sum_sq_partials = 0.0;
    for &v in &demeaned {
        partial += v;
        sum_sq_partials += partial * partial;
    }

    let lags = schwert_lag(n).min(n - 1);
    let gamma0 = demeaned.iter().map(|v| v * v).sum::<f64>() / nf;
    let mut long_run_var = gamma0;
    for lag in 1..=lags {
        let gamma = demeaned[lag..]
            .iter()
            .zip(demeaned.iter())
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / nf;
        let weight = 1.0 - lag as f64 / (lags as f64 + 1.0);
        long_run_var += 2.0 * weight * gamma;
    }
    if !(long_run_var > 0.0) {
        return Err(SeriesError::ConstantData);
    }

    let eta = sum_sq_partials / (nf * nf * long_run_var);
    let p_value = interpolate_pvalue(eta, KPSS_TABLE, 0.10, 0.01);
    Ok(TestOutcome::new(eta, p_value))
}

/// Engle-Granger two-step cointegration test.
///
/// Null hypothesis: no cointegration. Regresses `y` on `x` plus a
/// constant, then runs a Dickey-Fuller regression (no deterministic
/// terms) on the residuals, referred to the two-variable Engle-Granger
/// critical-value surface.
///
/// # Errors
///
/// Returns [`SeriesError::LengthMismatch`] for unpaired series plus the
/// validation and regression errors of the component steps.
pub fn engle_granger(y: &[f64], x: &[f64]) -> Result<TestOutcome, SeriesError> {
    if y.len() != x.len() {
        return Err(SeriesError::LengthMismatch {
            left: y.len(),
            right: x.len(),
        });
    }
    validate(y, 20)?;
    validate(x, 20)?;

    // First stage: cointegrating regression with constant
    let n = y.len();
    let mut design = Array2::zeros((n, 2));
    for i in 0..n {
        design[[i, 0]] = 1.0;
        design[[i, 1]] = x[i];
    }
    let first = ols(y, &design).ok_or(SeriesError::DegenerateRegression)?;
    let residuals = first.residuals().to_vec();

    // Second stage: Dickey-Fuller on the residuals, no constant
    let maxlag = schwert_lag(n).min((n - 1) / 3);
    let du: Vec<f64> = residuals.windows(2).map(|w| w[1] - w[0]).collect();
    let rows = du.len() - maxlag;
    let k = maxlag + 1;
    if rows <= k {
        return Err(SeriesError::InsufficientData { n, min: k + maxlag + 2 });
    }

    let mut dy = Vec::with_capacity(rows);
    let mut x2 = Array2::zeros((rows, k));
    for t in maxlag..du.len() {
        let r = t - maxlag;
        dy.push(du[t]);
        x2[[r, 0]] = residuals[t];
        for lag in 1..=maxlag {
            x2[[r, lag]] = du[t - lag];
        }
    }

    let second = ols(&dy, &x2).ok_or(SeriesError::DegenerateRegression)?;
    let t_stat = second
        .t_statistic(0)
        .ok_or(SeriesError::DegenerateRegression)?;
    let p_value = interpolate_pvalue(t_stat, EG_TABLE, 0.001, 0.999);
    Ok(TestOutcome::new(t_stat, p_value))
}

/// Schwert's lag-length rule: `floor(12 (n/100)^(1/4))`.
fn schwert_lag(n: usize) -> usize {
    (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize
}

/// Common input validation for the stationarity tests.
pub(crate) fn validate(series: &[f64], min: usize) -> Result<(), SeriesError> {
    if series.is_empty() {
        return Err(SeriesError::EmptyData);
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(SeriesError::NonFiniteData);
    }
    if series.len() < min {
        return Err(SeriesError::InsufficientData {
            n: series.len(),
            min,
        });
    }
    let lo = series.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        return Err(SeriesError::ConstantData);
    }
    Ok(())
}

/// Linear interpolation of a p-value over an ascending `(stat, p)` table,
/// clamped to `below` / `above` outside the tabulated range.
fn interpolate_pvalue(stat: f64, table: &[(f64, f64)], below: f64, above: f64) -> f64 {
    if stat <= table[0].0 {
        return below;
    }
    if stat >= table[table.len() - 1].0 {
        return above;
    }
    for pair in table.windows(2) {
        let (s0, p0) = pair[0];
        let (s1, p1) = pair[1];
        if stat <= s1 {
            let frac = (stat - s0) / (s1 - s0);
            return p0 + frac * (p1 - p0);
        }
    }
    above
}
