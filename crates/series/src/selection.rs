//! Grid search over ARIMA orders by out-of-sample forecast error.

use tracing::debug;

use crate::arima::{ArimaFit, ArimaSpec};
use crate::error::SeriesError;

/// Default AR orders scanned by [`select_best_order`].
pub const DEFAULT_P_ORDERS: &[usize] = &[0, 1, 2, 4, 6, 8, 10];
/// Default differencing orders scanned by [`select_best_order`].
pub const DEFAULT_D_ORDERS: &[usize] = &[0, 1, 2];
/// Default MA orders scanned by [`select_best_order`].
pub const DEFAULT_Q_ORDERS: &[usize] = &[0, 1, 2];

/// Candidate orders and evaluation settings for the grid search.
///
/// # Example
///
/// ```
/// use vigil_series::OrderGrid;
///
/// let grid = OrderGrid::default()
///     .with_p_orders(vec![0, 1])
///     .with_holdout(0.2);
/// assert_eq!(grid.p_orders(), &[0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderGrid {
    p_orders: Vec<usize>,
    d_orders: Vec<usize>,
    q_orders: Vec<usize>,
    holdout: f64,
}

impl Default for OrderGrid {
    fn default() -> Self {
        Self {
            p_orders: DEFAULT_P_ORDERS.to_vec(),
            d_orders: DEFAULT_D_ORDERS.to_vec(),
            q_orders: DEFAULT_Q_ORDERS.to_vec(),
            holdout: 0.25,
        }
    }
}

impl OrderGrid {
    /// Sets the AR orders to scan.
    pub fn with_p_orders(mut self, p_orders: Vec<usize>) -> Self {
        self.p_orders = p_orders;
        self
    }

    /// Sets the differencing orders to scan.
    pub fn with_d_orders(mut self, d_orders: Vec<usize>) -> Self {
        self.d_orders = d_orders;
        self
    }

    /// Sets the MA orders to scan.
    pub fn with_q_orders(mut self, q_orders: Vec<usize>) -> Self {
        self.q_orders = q_orders;
        self
    }

    /// Sets the holdout fraction used for the forecast evaluation.
    pub fn with_holdout(mut self, holdout: f64) -> Self {
        self.holdout = holdout;
        self
    }

    /// Returns the AR orders.
    pub fn p_orders(&self) -> &[usize] {
        &self.p_orders
    }

    /// Returns the differencing orders.
    pub fn d_orders(&self) -> &[usize] {
        &self.d_orders
    }

    /// Returns the MA orders.
    pub fn q_orders(&self) -> &[usize] {
        &self.q_orders
    }

    /// Returns the holdout fraction.
    pub fn holdout(&self) -> f64 {
        self.holdout
    }
}

/// Winning order of a grid search together with its holdout MSE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSelection {
    /// The winning order.
    pub spec: ArimaSpec,
    /// Mean squared one-step forecast error over the holdout.
    pub mse: f64,
}

/// Scores one candidate order by rolling one-step-ahead forecasting.
///
/// The series is split chronologically: the first `1 - holdout` of the
/// observations seed the history and the remainder is forecast one step
/// at a time, refitting on the growing history before each step, with
/// the squared errors averaged into an MSE.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidHoldout`] for a fraction outside (0, 1),
/// [`SeriesError::InsufficientData`] when the split leaves too little
/// history, and any fit or forecast error from the candidate itself.
pub fn evaluate_order(
    series: &[f64],
    spec: ArimaSpec,
    holdout: f64,
) -> Result<f64, SeriesError> {
    if !(holdout > 0.0 && holdout < 1.0) {
        return Err(SeriesError::InvalidHoldout { holdout });
    }
    let n = series.len();
    if n < 8 {
        return Err(SeriesError::InsufficientData { n, min: 8 });
    }

    let test_len = ((n as f64) * holdout).round().clamp(1.0, (n - 4) as f64) as usize;
    let train_len = n - test_len;

    let mut history: Vec<f64> = series[..train_len].to_vec();
    let mut sq_err = 0.0;
    for &actual in &series[train_len..] {
        let fit: ArimaFit = spec.fit(&history)?;
        let forecast = fit.forecast_next(&history)?;
        sq_err += (forecast - actual) * (forecast - actual);
        history.push(actual);
    }

    Ok(sq_err / test_len as f64)
}

/// Selects the ARIMA order with the lowest rolling forecast MSE.
///
/// Every `(p, d, q)` combination in the grid is scored with
/// [`evaluate_order`]; candidates that fail to fit are skipped. When no
/// candidate at all produces a score the search fails with
/// [`SeriesError::NoViableModel`] rather than returning an unset order.
pub fn select_best_order(
    series: &[f64],
    grid: &OrderGrid,
) -> Result<OrderSelection, SeriesError> {
    if !(grid.holdout > 0.0 && grid.holdout < 1.0) {
        return Err(SeriesError::InvalidHoldout {
            holdout: grid.holdout,
        });
    }

    let mut best: Option<OrderSelection> = None;
    let mut candidates = 0usize;

    for &p in &grid.p_orders {
        for &d in &grid.d_orders {
            for &q in &grid.q_orders {
                candidates += 1;
                let spec = ArimaSpec::new(p, d, q);
                match evaluate_order(series, spec, grid.holdout) {
                    Ok(mse) => {
                        debug!(p, d, q, mse, "candidate order scored");
                        if best.is_none_or(|b| mse < b.mse) {
                            best = Some(OrderSelection { spec, mse });
                        }
                    }
                    Err(error) => {
                        debug!(p, d, q, %error, "candidate order skipped");
                    }
                }
            }
        }
    }

    best.ok_or(SeriesError::NoViableModel { candidates })
}
