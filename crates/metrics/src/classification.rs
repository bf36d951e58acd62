//! One-vs-rest classification metrics.
//!
//! Each metric treats `label` as the positive class and everything else
//! as negative. Zero denominators follow the usual convention and score
//! 0.0 rather than NaN, so threshold comparisons stay well-defined.

/// Tallies of a one-vs-rest confusion for `label`.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    true_positive: usize,
    false_positive: usize,
    false_negative: usize,
}

fn tally(y_true: &[i64], y_pred: &[i64], label: i64) -> Tally {
    debug_assert_eq!(y_true.len(), y_pred.len());

    let mut t = Tally::default();
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        match (truth == label, pred == label) {
            (true, true) => t.true_positive += 1,
            (false, true) => t.false_positive += 1,
            (true, false) => t.false_negative += 1,
            (false, false) => {}
        }
    }
    t
}

/// Precision of `label`: TP / (TP + FP). 0.0 when nothing is predicted
/// as `label`.
pub fn precision(y_true: &[i64], y_pred: &[i64], label: i64) -> f64 {
    let t = tally(y_true, y_pred, label);
    let predicted = t.true_positive + t.false_positive;
    if predicted == 0 {
        return 0.0;
    }
    t.true_positive as f64 / predicted as f64
}

/// Recall of `label`: TP / (TP + FN). 0.0 when `label` never occurs in
/// `y_true`.
pub fn recall(y_true: &[i64], y_pred: &[i64], label: i64) -> f64 {
    let t = tally(y_true, y_pred, label);
    let actual = t.true_positive + t.false_negative;
    if actual == 0 {
        return 0.0;
    }
    t.true_positive as f64 / actual as f64
}

/// F1 score of `label`: harmonic mean of precision and recall. 0.0 when
/// both are zero.
pub fn f1_score(y_true: &[i64], y_pred: &[i64], label: i64) -> f64 {
    let p = precision(y_true, y_pred, label);
    let r = recall(y_true, y_pred, label);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}
