//! Rank transforms and Spearman rank correlation.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::outcome::TestOutcome;
use crate::pearson_correlation;

/// Assigns 1-based ranks to `values`, averaging ranks over ties.
///
/// Example: `[10.0, 30.0, 20.0, 30.0]` ranks to `[1.0, 3.5, 2.0, 3.5]`.
pub fn rank_with_ties(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Extend j over the run of equal values starting at i
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &k in &order[i..=j] {
            ranks[k] = avg_rank;
        }
        i = j + 1;
    }

    ranks
}

/// Spearman rank correlation between two paired samples.
///
/// Computes the Pearson correlation of tie-averaged ranks and a two-sided
/// p-value from the Student-t approximation with `n - 2` degrees of
/// freedom. Pairs with a non-finite member are dropped first.
///
/// Returns `None` when fewer than 3 finite pairs remain, when the inputs
/// have different lengths, or when either sample is constant.
pub fn spearman(x: &[f64], y: &[f64]) -> Option<TestOutcome> {
    if x.len() != y.len() {
        return None;
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(&xi, &yi)| (xi, yi))
        .unzip();

    if xs.len() < 3 {
        return None;
    }

    let rank_x = rank_with_ties(&xs);
    let rank_y = rank_with_ties(&ys);
    let rho = pearson_correlation(&rank_x, &rank_y)?;

    let n = xs.len() as f64;
    let p_value = if rho.abs() >= 1.0 {
        0.0
    } else {
        let t = rho * ((n - 2.0) / (1.0 - rho * rho)).sqrt();
        let dist = StudentsT::new(0.0, 1.0, n - 2.0).ok()?;
        (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0)
    };

    Some(TestOutcome::new(rho, p_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ranks_no_ties() {
        let ranks = rank_with_ties(&[30.0, 10.0, 20.0]);
        assert_eq!(ranks, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn ranks_with_ties() {
        let ranks = rank_with_ties(&[10.0, 30.0, 20.0, 30.0]);
        assert_eq!(ranks, vec![1.0, 3.5, 2.0, 3.5]);
    }

    #[test]
    fn ranks_all_equal() {
        let ranks = rank_with_ties(&[5.0, 5.0, 5.0]);
        assert_eq!(ranks, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn ranks_empty() {
        assert!(rank_with_ties(&[]).is_empty());
    }

    #[test]
    fn spearman_identity() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let outcome = spearman(&x, &x).unwrap();
        assert_relative_eq!(outcome.statistic, 1.0, epsilon = 1e-12);
        assert_eq!(outcome.p_value, 0.0);
    }

    #[test]
    fn spearman_monotone_nonlinear() {
        // Monotone transform preserves rank correlation exactly
        let x: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
        let outcome = spearman(&x, &y).unwrap();
        assert_relative_eq!(outcome.statistic, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn spearman_reversed() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [5.0, 4.0, 3.0, 2.0, 1.0];
        let outcome = spearman(&x, &y).unwrap();
        assert_relative_eq!(outcome.statistic, -1.0, epsilon = 1e-12);
        assert_eq!(outcome.p_value, 0.0);
    }

    #[test]
    fn spearman_uncorrelated_p_large() {
        // Alternating pattern against a monotone one: weak rank correlation
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let y = [1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 4.0, -4.0];
        let outcome = spearman(&x, &y).unwrap();
        assert!(outcome.statistic.abs() < 0.6);
        assert!(outcome.p_value > 0.05);
    }

    #[test]
    fn spearman_length_mismatch() {
        assert!(spearman(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn spearman_too_few_pairs() {
        assert!(spearman(&[1.0, 2.0], &[2.0, 1.0]).is_none());
    }

    #[test]
    fn spearman_constant_input() {
        let x = [3.0, 3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        assert!(spearman(&x, &y).is_none());
    }

    #[test]
    fn spearman_drops_non_finite_pairs() {
        let x = [1.0, f64::NAN, 2.0, 3.0, 4.0];
        let y = [1.0, 9.0, 2.0, 3.0, 4.0];
        let outcome = spearman(&x, &y).unwrap();
        assert_relative_eq!(outcome.statistic, 1.0, epsilon = 1e-12);
    }
}
