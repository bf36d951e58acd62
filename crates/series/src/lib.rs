//! # vigil-series
//!
//! Time-series diagnostics for model and data validation: stationarity
//! and cointegration tests, independence and autocorrelation checks,
//! residual diagnostics over a lazily fitted ARIMA model, and the
//! forecast-error grid search that selects its order.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["SeriesTests::new(series)"] --> B[".ad_fuller() / .kpss() / .bds() / .q_stat()"]
//!     A -->|"first residual diagnostic"| C["fit(): select_best_order + ArimaSpec::fit"]
//!     C --> D[".ljung_box() / .breusch_godfrey() / .het_arch() / .cusum_ols_resid()"]
//!     C -->|".refit()"| C
//! ```
//!
//! ## Two usage paths
//!
//! **Diagnostics over one series** (model fitted on demand, cached):
//! ```ignore
//! let mut tests = SeriesTests::new(series);
//! let adf = tests.ad_fuller()?;
//! let lb = tests.ljung_box(10)?; // fits once, reuses afterwards
//! ```
//!
//! **Direct order search** (known grid):
//! ```ignore
//! let selection = select_best_order(&series, &OrderGrid::default())?;
//! let fit = selection.spec.fit(&series)?;
//! ```

mod arima;
mod bds;
mod diagnostics;
mod error;
mod selection;
mod stationarity;

pub(crate) mod pacf;

pub use arima::{ArimaFit, ArimaSpec};
pub use bds::bds;
pub use diagnostics::SeriesTests;
pub use error::SeriesError;
pub use selection::{
    DEFAULT_D_ORDERS, DEFAULT_P_ORDERS, DEFAULT_Q_ORDERS, OrderGrid, OrderSelection,
    evaluate_order, select_best_order,
};
pub use stationarity::{ad_fuller, engle_granger, kpss};
pub use vigil_stats::TestOutcome;
