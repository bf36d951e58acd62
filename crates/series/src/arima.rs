//! ARIMA(p,d,q) model fitting via conditional sum of squares.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;

use crate::error::SeriesError;
use crate::pacf;

/// An unfitted ARIMA(p,d,q) model specification.
///
/// Entry point of the fitting workflow: create a spec with
/// [`ArimaSpec::new()`], then call [`ArimaSpec::fit()`] to obtain an
/// [`ArimaFit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArimaSpec {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaSpec {
    /// Creates a new ARIMA(p,d,q) specification.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing order (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Fits this specification to observed data.
    ///
    /// The series is differenced `d` times, centred, and the ARMA part
    /// is estimated by minimising the conditional sum of squares with
    /// Nelder-Mead over an unconstrained PACF parametrisation.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::EmptyData`] | `data` is empty |
    /// | [`SeriesError::InsufficientData`] | too few observations for the order |
    /// | [`SeriesError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`SeriesError::ConstantData`] | the differenced series has zero range |
    /// | [`SeriesError::OptimizationFailed`] | the optimizer fails to converge |
    pub fn fit(&self, data: &[f64]) -> Result<ArimaFit, SeriesError> {
        if data.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(SeriesError::NonFiniteData);
        }
        let min_len = self.d + (self.p + self.q).max(1) + 4;
        if data.len() < min_len {
            return Err(SeriesError::InsufficientData {
                n: data.len(),
                min: min_len,
            });
        }

        let w = difference(data, self.d);
        let min_val = w.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_val = w.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if (max_val - min_val).abs() < f64::EPSILON {
            return Err(SeriesError::ConstantData);
        }

        let n = w.len() as f64;
        let mean = w.iter().sum::<f64>() / n;
        let centered: Vec<f64> = w.iter().map(|x| x - mean).collect();

        // ARMA(0,0) fast path: white noise around the mean
        if self.p == 0 && self.q == 0 {
            let sigma2 = centered.iter().map(|x| x * x).sum::<f64>() / n;
            let log_likelihood = gaussian_loglik(n, sigma2);
            return Ok(ArimaFit {
                spec: *self,
                ar: Vec::new(),
                ma: Vec::new(),
                sigma2,
                residuals: centered,
                log_likelihood,
                mean,
            });
        }

        let dim = self.p + self.q;
        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
        simplex.push(vec![0.0; dim]);
        for i in 0..dim {
            let mut vertex = vec![0.0; dim];
            vertex[i] = 0.5;
            simplex.push(vertex);
        }

        let cost = CssCost {
            data: &centered,
            p: self.p,
        };
        let solver = NelderMead::new(simplex)
            .with_sd_tolerance(1e-7)
            .map_err(|_| SeriesError::OptimizationFailed)?;
        let result = Executor::new(cost, solver)
            .configure(|state| state.max_iters(500))
            .run()
            .map_err(|_| SeriesError::OptimizationFailed)?;

        let best_params = result
            .state()
            .best_param
            .as_ref()
            .ok_or(SeriesError::OptimizationFailed)?;

        let (alpha, beta) = best_params.split_at(self.p);
        let ar = pacf::stationary_coeffs(alpha);
        let ma = pacf::stationary_coeffs(beta);

        let residuals = css_residuals(&centered, &ar, &ma);
        let sse: f64 = residuals.iter().map(|e| e * e).sum();
        let sigma2 = sse / n;
        if !sigma2.is_finite() || sigma2 <= 0.0 {
            return Err(SeriesError::OptimizationFailed);
        }

        Ok(ArimaFit {
            spec: *self,
            ar,
            ma,
            sigma2,
            residuals,
            log_likelihood: gaussian_loglik(n, sigma2),
            mean,
        })
    }
}

/// A fitted ARIMA(p,d,q) model produced by [`ArimaSpec::fit()`].
///
/// Holds the estimated AR (`phi`) and MA (`theta`) coefficients of the
/// differenced series, the innovation variance, residuals, and the
/// Gaussian log-likelihood implied by the conditional sum of squares.
#[derive(Clone, Debug)]
pub struct ArimaFit {
    spec: ArimaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    sigma2: f64,
    residuals: Vec<f64>,
    log_likelihood: f64,
    mean: f64,
}

impl ArimaFit {
    /// Returns the [`ArimaSpec`] that produced this fit.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Returns the `(p, d, q)` order of the fitted model.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.spec.p, self.spec.d, self.spec.q)
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the one-step-ahead residuals of the differenced, centred
    /// series.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the Gaussian log-likelihood of the fit.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Returns the mean of the differenced series removed before fitting.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Akaike Information Criterion: `2k - 2 log L` with
    /// `k = p + q + 1` estimated parameters.
    pub fn aic(&self) -> f64 {
        let k = (self.spec.p + self.spec.q + 1) as f64;
        2.0 * k - 2.0 * self.log_likelihood
    }

    /// One-step-ahead forecast of the next observation after `history`.
    ///
    /// The history is differenced `d` times, centred with the fitted
    /// mean, run through the residual recursion, and the forecast of the
    /// differenced series is re-integrated against the last levels of
    /// the history.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyData`], [`SeriesError::NonFiniteData`],
    /// or [`SeriesError::InsufficientData`] when the history cannot
    /// support `d` rounds of differencing.
    pub fn forecast_next(&self, history: &[f64]) -> Result<f64, SeriesError> {
        if history.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        if history.iter().any(|x| !x.is_finite()) {
            return Err(SeriesError::NonFiniteData);
        }
        let d = self.spec.d;
        if history.len() < d + 1 {
            return Err(SeriesError::InsufficientData {
                n: history.len(),
                min: d + 1,
            });
        }

        let mut levels: Vec<Vec<f64>> = Vec::with_capacity(d + 1);
        levels.push(history.to_vec());
        for k in 0..d {
            let next: Vec<f64> = levels[k].windows(2).map(|w| w[1] - w[0]).collect();
            levels.push(next);
        }

        let centered: Vec<f64> = levels[d].iter().map(|x| x - self.mean).collect();
        let residuals = css_residuals(&centered, &self.ar, &self.ma);

        let t = centered.len();
        let mut pred = 0.0;
        for (i, &phi) in self.ar.iter().enumerate() {
            if t > i {
                pred += phi * centered[t - 1 - i];
            }
        }
        for (j, &theta) in self.ma.iter().enumerate() {
            if t > j {
                pred += theta * residuals[t - 1 - j];
            }
        }

        let mut forecast = pred + self.mean;
        for level in levels[..d].iter().rev() {
            if let Some(&last) = level.last() {
                forecast += last;
            }
        }
        Ok(forecast)
    }
}

/// Applies `d` rounds of first differencing.
pub(crate) fn difference(data: &[f64], d: usize) -> Vec<f64> {
    let mut out = data.to_vec();
    for _ in 0..d {
        out = out.windows(2).map(|w| w[1] - w[0]).collect();
    }
    out
}

/// One-step-ahead residual recursion of the conditional sum of squares.
///
/// Pre-sample values of both the series and the innovations are taken
/// as zero, the usual CSS convention.
pub(crate) fn css_residuals(w: &[f64], ar: &[f64], ma: &[f64]) -> Vec<f64> {
    let mut e = vec![0.0; w.len()];
    for t in 0..w.len() {
        let mut pred = 0.0;
        for (i, &phi) in ar.iter().enumerate() {
            if t > i {
                pred += phi * w[t - 1 - i];
            }
        }
        for (j, &theta) in ma.iter().enumerate() {
            if t > j {
                pred += theta * e[t - 1 - j];
            }
        }
        e[t] = w[t] - pred;
    }
    e
}

fn gaussian_loglik(n: f64, sigma2: f64) -> f64 {
    -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + sigma2.ln() + 1.0)
}

/// Cost function for argmin: conditional sum of squares.
struct CssCost<'a> {
    data: &'a [f64],
    p: usize,
}

impl CostFunction for CssCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let (alpha, beta) = params.split_at(self.p);
        let ar = pacf::stationary_coeffs(alpha);
        let ma = pacf::stationary_coeffs(beta);
        let sse: f64 = css_residuals(self.data, &ar, &ma)
            .iter()
            .map(|e| e * e)
            .sum();
        if sse.is_finite() {
            Ok(sse)
        } else {
            Ok(f64::MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    fn white_noise(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }

    #[test]
    fn spec_round_trip() {
        let spec = ArimaSpec::new(2, 1, 1);
        assert_eq!(spec.p(), 2);
        assert_eq!(spec.d(), 1);
        assert_eq!(spec.q(), 1);
    }

    #[test]
    fn spec_is_copy_and_eq() {
        let a = ArimaSpec::new(1, 0, 1);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, ArimaSpec::new(2, 0, 1));
    }

    #[test]
    fn fit_empty_data() {
        let err = ArimaSpec::new(1, 0, 0).fit(&[]).unwrap_err();
        assert!(matches!(err, SeriesError::EmptyData));
    }

    #[test]
    fn fit_insufficient_data() {
        let err = ArimaSpec::new(2, 0, 0).fit(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, SeriesError::InsufficientData { .. }));
    }

    #[test]
    fn fit_non_finite_data() {
        let mut data = white_noise(50, 1);
        data[10] = f64::NAN;
        let err = ArimaSpec::new(1, 0, 0).fit(&data).unwrap_err();
        assert!(matches!(err, SeriesError::NonFiniteData));
    }

    #[test]
    fn fit_constant_data() {
        let err = ArimaSpec::new(1, 0, 0).fit(&[5.0; 30]).unwrap_err();
        assert!(matches!(err, SeriesError::ConstantData));
    }

    #[test]
    fn fit_constant_after_differencing() {
        // A perfect linear trend becomes constant after one difference
        let data: Vec<f64> = (0..30).map(|i| 2.0 * i as f64).collect();
        let err = ArimaSpec::new(0, 1, 0).fit(&data).unwrap_err();
        assert!(matches!(err, SeriesError::ConstantData));
    }

    #[test]
    fn white_noise_sigma2_recovery() {
        let data = white_noise(500, 42);
        let fit = ArimaSpec::new(0, 0, 0).fit(&data).unwrap();
        assert_eq!(fit.order(), (0, 0, 0));
        assert!(fit.sigma2() > 0.6 && fit.sigma2() < 1.4, "sigma2 = {}", fit.sigma2());
        assert!(fit.mean().abs() < 0.2, "mean = {}", fit.mean());
    }

    #[test]
    fn ar1_coefficient_recovery() {
        let phi = 0.7;
        let n = 1000;
        let mut rng = rand::rngs::StdRng::seed_from_u64(123);
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut data = vec![0.0; n];
        for t in 1..n {
            data[t] = phi * data[t - 1] + normal.sample(&mut rng);
        }

        let fit = ArimaSpec::new(1, 0, 0).fit(&data).unwrap();
        assert!(
            (fit.ar()[0] - phi).abs() < 0.15,
            "AR(1) phi: expected ~{}, got {}",
            phi,
            fit.ar()[0]
        );
    }

    #[test]
    fn ma1_coefficient_recovery() {
        let theta = 0.5;
        let n = 1000;
        let mut rng = rand::rngs::StdRng::seed_from_u64(456);
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut eps = vec![0.0; n];
        let mut data = vec![0.0; n];
        for t in 0..n {
            eps[t] = normal.sample(&mut rng);
            data[t] = eps[t] + if t > 0 { theta * eps[t - 1] } else { 0.0 };
        }

        let fit = ArimaSpec::new(0, 0, 1).fit(&data).unwrap();
        assert!(
            (fit.ma()[0] - theta).abs() < 0.15,
            "MA(1) theta: expected ~{}, got {}",
            theta,
            fit.ma()[0]
        );
    }

    #[test]
    fn differencing_reduces_length() {
        assert_eq!(difference(&[1.0, 3.0, 6.0], 1), vec![2.0, 3.0]);
        assert_eq!(difference(&[1.0, 3.0, 6.0], 2), vec![1.0]);
        assert_eq!(difference(&[1.0, 2.0], 0), vec![1.0, 2.0]);
    }

    #[test]
    fn css_residuals_pure_ar() {
        // w = [1, 2, 3], phi = 0.5:
        // e0 = 1, e1 = 2 - 0.5*1 = 1.5, e2 = 3 - 0.5*2 = 2
        let e = css_residuals(&[1.0, 2.0, 3.0], &[0.5], &[]);
        assert_eq!(e, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn css_residuals_pure_ma() {
        // w = [1, 2], theta = 0.5: e0 = 1, e1 = 2 - 0.5*1 = 1.5
        let e = css_residuals(&[1.0, 2.0], &[], &[0.5]);
        assert_eq!(e, vec![1.0, 1.5]);
    }

    #[test]
    fn aic_penalises_parameters() {
        let data = white_noise(300, 7);
        let small = ArimaSpec::new(0, 0, 0).fit(&data).unwrap();
        let large = ArimaSpec::new(2, 0, 2).fit(&data).unwrap();
        // On pure noise the bigger model cannot buy enough likelihood
        // to cover its parameter penalty
        assert!(small.aic() < large.aic() + 10.0);
    }

    #[test]
    fn forecast_ar1_shrinks_toward_mean() {
        let phi = 0.8;
        let n = 500;
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        let normal = Normal::new(0.0, 0.5).unwrap();
        let mut data = vec![0.0; n];
        for t in 1..n {
            data[t] = phi * data[t - 1] + normal.sample(&mut rng);
        }
        let fit = ArimaSpec::new(1, 0, 0).fit(&data).unwrap();

        // Forecast from a history ending far above the mean
        let mut history = data.clone();
        history.push(5.0);
        let forecast = fit.forecast_next(&history).unwrap();
        assert!(forecast > 1.0 && forecast < 5.0, "forecast = {forecast}");
    }

    #[test]
    fn forecast_random_walk_stays_near_last_value() {
        // ARIMA(0,1,0): the forecast of the next value is the last level
        // plus the mean step
        let data: Vec<f64> = (0..100)
            .map(|i| i as f64 + ((i * 13 + 5) % 17) as f64 * 0.01)
            .collect();
        let fit = ArimaSpec::new(0, 1, 0).fit(&data).unwrap();
        let forecast = fit.forecast_next(&data).unwrap();
        let last = data[data.len() - 1];
        assert!(
            (forecast - (last + fit.mean())).abs() < 1e-9,
            "forecast = {forecast}, last = {last}"
        );
    }

    #[test]
    fn forecast_errors() {
        let data = white_noise(50, 11);
        let fit = ArimaSpec::new(0, 1, 0).fit(&data).unwrap();
        assert!(matches!(fit.forecast_next(&[]), Err(SeriesError::EmptyData)));
        assert!(matches!(
            fit.forecast_next(&[1.0]),
            Err(SeriesError::InsufficientData { .. })
        ));
        assert!(matches!(
            fit.forecast_next(&[1.0, f64::NAN, 2.0]),
            Err(SeriesError::NonFiniteData)
        ));
    }

    #[test]
    fn fit_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<ArimaFit>();
    }
}
