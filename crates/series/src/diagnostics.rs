//! Series-level diagnostic harness with a cached fitted model.

use ndarray::Array2;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::info;

use vigil_stats::{TestOutcome, kolmogorov_sf, ols};

use crate::arima::ArimaFit;
use crate::bds;
use crate::error::SeriesError;
use crate::selection::{OrderGrid, select_best_order};
use crate::stationarity;

/// Diagnostic tests over a single time series.
///
/// Stationarity, cointegration, and independence tests operate on the
/// raw series. Residual diagnostics ([`SeriesTests::ljung_box`],
/// [`SeriesTests::breusch_godfrey`], [`SeriesTests::het_arch`],
/// [`SeriesTests::cusum_ols_resid`]) need a fitted model: the first such
/// call selects an order over the configured [`OrderGrid`], fits it on
/// the full series, and caches the result. The cache is an explicit
/// field — it is reused until [`SeriesTests::refit`] discards it, never
/// invalidated implicitly.
///
/// # Example
///
/// ```no_run
/// use vigil_series::SeriesTests;
///
/// let series: Vec<f64> = (0..60).map(|i| (i % 7) as f64).collect();
/// let mut tests = SeriesTests::new(series);
///
/// let adf = tests.ad_fuller().unwrap();
/// println!("ADF statistic {} (p = {})", adf.statistic, adf.p_value);
///
/// let lb = tests.ljung_box(10).unwrap(); // fits and caches the model
/// println!("Residual Q {} (p = {})", lb.statistic, lb.p_value);
/// ```
#[derive(Debug, Clone)]
pub struct SeriesTests {
    series: Vec<f64>,
    grid: OrderGrid,
    fitted: Option<ArimaFit>,
}

impl SeriesTests {
    /// Wraps a series with the default order grid.
    pub fn new(series: Vec<f64>) -> Self {
        Self {
            series,
            grid: OrderGrid::default(),
            fitted: None,
        }
    }

    /// Replaces the order grid used by [`SeriesTests::fit`].
    pub fn with_grid(mut self, grid: OrderGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Returns the wrapped series.
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    /// Returns the cached fit, if any.
    pub fn fitted(&self) -> Option<&ArimaFit> {
        self.fitted.as_ref()
    }

    /// Augmented Dickey-Fuller unit-root test on the raw series.
    pub fn ad_fuller(&self) -> Result<TestOutcome, SeriesError> {
        stationarity::ad_fuller(&self.series)
    }

    /// KPSS level-stationarity test on the raw series.
    pub fn kpss(&self) -> Result<TestOutcome, SeriesError> {
        stationarity::kpss(&self.series)
    }

    /// Engle-Granger cointegration test against a second series.
    pub fn cointegration(&self, other: &[f64]) -> Result<TestOutcome, SeriesError> {
        stationarity::engle_granger(&self.series, other)
    }

    /// BDS independence test on the raw series.
    pub fn bds(&self) -> Result<TestOutcome, SeriesError> {
        bds::bds(&self.series)
    }

    /// Ljung-Box Q statistic of the raw series at the given lag.
    pub fn q_stat(&self, lags: usize) -> Result<TestOutcome, SeriesError> {
        vigil_stats::ljung_box(&self.series, lags).ok_or(SeriesError::InvalidLags {
            lags,
            n: self.series.len(),
        })
    }

    /// Fits (or returns the cached) model for residual diagnostics.
    ///
    /// Selects the lowest-forecast-error order over the grid, fits it on
    /// the full series, and caches the result for subsequent calls.
    pub fn fit(&mut self) -> Result<&ArimaFit, SeriesError> {
        if self.fitted.is_none() {
            let selection = select_best_order(&self.series, &self.grid)?;
            let fit = selection.spec.fit(&self.series)?;
            let (p, d, q) = fit.order();
            info!(p, d, q, mse = selection.mse, "fitted series model");
            self.fitted = Some(fit);
        }
        match self.fitted.as_ref() {
            Some(fit) => Ok(fit),
            None => unreachable!("model cached by the branch above"),
        }
    }

    /// Discards any cached model and fits afresh.
    pub fn refit(&mut self) -> Result<&ArimaFit, SeriesError> {
        self.fitted = None;
        self.fit()
    }

    /// Ljung-Box test on the residuals of the fitted model.
    pub fn ljung_box(&mut self, lags: usize) -> Result<TestOutcome, SeriesError> {
        let fit = self.fit()?;
        let residuals = fit.residuals();
        vigil_stats::ljung_box(residuals, lags).ok_or(SeriesError::InvalidLags {
            lags,
            n: residuals.len(),
        })
    }

    /// Breusch-Godfrey LM test for residual serial correlation.
    ///
    /// Auxiliary regression of the residuals on a constant and their own
    /// `lags` lags; `n · R²` is referred to χ²(lags).
    pub fn breusch_godfrey(&mut self, lags: usize) -> Result<TestOutcome, SeriesError> {
        let fit = self.fit()?;
        let residuals = fit.residuals().to_vec();
        lag_lm_test(&residuals, lags)
    }

    /// Engle's ARCH LM test for conditional heteroskedasticity.
    ///
    /// Same auxiliary regression as [`SeriesTests::breusch_godfrey`] but
    /// on the squared residuals.
    pub fn het_arch(&mut self, lags: usize) -> Result<TestOutcome, SeriesError> {
        let fit = self.fit()?;
        let squared: Vec<f64> = fit.residuals().iter().map(|e| e * e).collect();
        lag_lm_test(&squared, lags)
    }

    /// CUSUM test of the fitted residuals for structural breaks.
    ///
    /// The statistic is the supremum of the scaled cumulative residual
    /// path; its limiting law is the Brownian-bridge supremum, so the
    /// p-value comes from the Kolmogorov distribution.
    pub fn cusum_ols_resid(&mut self) -> Result<TestOutcome, SeriesError> {
        let fit = self.fit()?;
        let residuals = fit.residuals();
        let n = residuals.len();
        let scale = vigil_stats::sd(residuals) * (n as f64).sqrt();
        if !(scale > 0.0) {
            return Err(SeriesError::ConstantData);
        }

        let mut cum = 0.0;
        let mut sup = 0.0f64;
        for &e in residuals {
            cum += e;
            sup = sup.max((cum / scale).abs());
        }

        Ok(TestOutcome::new(sup, kolmogorov_sf(sup)))
    }
}

/// LM test via an auxiliary regression of `values` on a constant and
/// its own `lags` lags: `nobs · R²` referred to χ²(lags).
fn lag_lm_test(values: &[f64], lags: usize) -> Result<TestOutcome, SeriesError> {
    let n = values.len();
    if lags == 0 || n <= lags + 2 {
        return Err(SeriesError::InvalidLags { lags, n });
    }

    let rows = n - lags;
    let k = lags + 1;
    if rows <= k {
        return Err(SeriesError::InvalidLags { lags, n });
    }

    let mut y = Vec::with_capacity(rows);
    let mut x = Array2::zeros((rows, k));
    for t in lags..n {
        let r = t - lags;
        y.push(values[t]);
        x[[r, 0]] = 1.0;
        for lag in 1..=lags {
            x[[r, lag]] = values[t - lag];
        }
    }

    let fit = ols(&y, &x).ok_or(SeriesError::DegenerateRegression)?;
    let lm = rows as f64 * fit.r_squared();
    let dist = ChiSquared::new(lags as f64).map_err(|_| SeriesError::DegenerateRegression)?;
    let p_value = (1.0 - dist.cdf(lm)).clamp(0.0, 1.0);
    Ok(TestOutcome::new(lm, p_value))
}
