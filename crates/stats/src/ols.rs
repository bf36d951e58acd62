//! Ordinary least squares on small design matrices.
//!
//! Solves the normal equations with Gauss-Jordan elimination. Design
//! matrices here are tiny (a constant plus a handful of lags), so the
//! dense inverse is both adequate and gives the coefficient covariance
//! needed for standard errors.

use ndarray::Array2;

/// A fitted least-squares regression.
#[derive(Clone, Debug)]
pub struct OlsFit {
    coefficients: Vec<f64>,
    std_errors: Vec<f64>,
    residuals: Vec<f64>,
    r_squared: f64,
}

impl OlsFit {
    /// Estimated coefficients, one per design column.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Standard errors of the coefficients.
    pub fn std_errors(&self) -> &[f64] {
        &self.std_errors
    }

    /// Residuals `y - Xb`, one per observation.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Coefficient of determination. 0.0 when the response is constant.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// t-statistic for the coefficient at `index`, or `None` when the
    /// index is out of range or its standard error is zero.
    pub fn t_statistic(&self, index: usize) -> Option<f64> {
        let coef = self.coefficients.get(index)?;
        let se = self.std_errors.get(index)?;
        if *se <= 0.0 {
            return None;
        }
        Some(coef / se)
    }
}

/// Fits `y = Xb + e` by ordinary least squares.
///
/// Returns `None` when the dimensions are inconsistent, there are not
/// strictly more observations than columns, or the design is singular.
pub fn ols(y: &[f64], x: &Array2<f64>) -> Option<OlsFit> {
    let n = x.nrows();
    let k = x.ncols();
    if y.len() != n || k == 0 || n <= k {
        return None;
    }

    // Normal equations: (X'X) b = X'y
    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    for i in 0..n {
        for a in 0..k {
            let xa = x[[i, a]];
            xty[a] += xa * y[i];
            for b in a..k {
                xtx[a][b] += xa * x[[i, b]];
            }
        }
    }
    for a in 0..k {
        for b in 0..a {
            xtx[a][b] = xtx[b][a];
        }
    }

    let xtx_inv = invert(&xtx)?;
    let coefficients: Vec<f64> = (0..k)
        .map(|a| (0..k).map(|b| xtx_inv[a][b] * xty[b]).sum())
        .collect();

    let residuals: Vec<f64> = (0..n)
        .map(|i| {
            let fitted: f64 = (0..k).map(|a| x[[i, a]] * coefficients[a]).sum();
            y[i] - fitted
        })
        .collect();

    let sse: f64 = residuals.iter().map(|e| e * e).sum();
    let sigma2 = sse / (n - k) as f64;
    let std_errors: Vec<f64> = (0..k)
        .map(|a| (sigma2 * xtx_inv[a][a]).max(0.0).sqrt())
        .collect();

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let tss: f64 = y.iter().map(|&v| (v - y_mean) * (v - y_mean)).sum();
    let r_squared = if tss > 0.0 {
        (1.0 - sse / tss).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Some(OlsFit {
        coefficients,
        std_errors,
        residuals,
        r_squared,
    })
}

/// Gauss-Jordan inverse with partial pivoting. `None` if singular.
fn invert(a: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let k = a.len();
    let mut work: Vec<Vec<f64>> = a.iter().cloned().collect();
    let mut inv: Vec<Vec<f64>> = (0..k)
        .map(|i| (0..k).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for col in 0..k {
        // Partial pivot
        let pivot_row = (col..k).max_by(|&a_row, &b_row| {
            work[a_row][col]
                .abs()
                .partial_cmp(&work[b_row][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if work[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        work.swap(col, pivot_row);
        inv.swap(col, pivot_row);

        let pivot = work[col][col];
        for j in 0..k {
            work[col][j] /= pivot;
            inv[col][j] /= pivot;
        }
        for row in 0..k {
            if row == col {
                continue;
            }
            let factor = work[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..k {
                work[row][j] -= factor * work[col][j];
                inv[row][j] -= factor * inv[col][j];
            }
        }
    }

    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn exact_line_recovery() {
        // y = 2 + 3x, no noise
        let x = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let y = [2.0, 5.0, 8.0, 11.0];
        let fit = ols(&y, &x).unwrap();
        assert_relative_eq!(fit.coefficients()[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(fit.coefficients()[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r_squared(), 1.0, epsilon = 1e-10);
        for e in fit.residuals() {
            assert!(e.abs() < 1e-10);
        }
    }

    #[test]
    fn intercept_only_recovers_mean() {
        let x = array![[1.0], [1.0], [1.0], [1.0]];
        let y = [2.0, 4.0, 6.0, 8.0];
        let fit = ols(&y, &x).unwrap();
        assert_relative_eq!(fit.coefficients()[0], 5.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r_squared(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn known_standard_error() {
        // Intercept-only model: se = sd / sqrt(n)
        let x = array![[1.0], [1.0], [1.0], [1.0], [1.0]];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let fit = ols(&y, &x).unwrap();
        // sd of y = sqrt(2.5); se = sqrt(2.5/5)
        assert_relative_eq!(fit.std_errors()[0], (2.5f64 / 5.0).sqrt(), epsilon = 1e-10);
        let t = fit.t_statistic(0).unwrap();
        assert_relative_eq!(t, 3.0 / (2.5f64 / 5.0).sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn singular_design_is_none() {
        // Two identical columns
        let x = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
        let y = [1.0, 2.0, 3.0, 4.0];
        assert!(ols(&y, &x).is_none());
    }

    #[test]
    fn dimension_mismatch_is_none() {
        let x = array![[1.0], [1.0]];
        let y = [1.0, 2.0, 3.0];
        assert!(ols(&y, &x).is_none());
    }

    #[test]
    fn underdetermined_is_none() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = [1.0, 2.0];
        assert!(ols(&y, &x).is_none());
    }

    #[test]
    fn t_statistic_out_of_range() {
        let x = array![[1.0], [1.0], [1.0]];
        let y = [1.0, 2.0, 3.0];
        let fit = ols(&y, &x).unwrap();
        assert!(fit.t_statistic(5).is_none());
    }
}
