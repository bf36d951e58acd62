//! Kolmogorov distribution tail probability.

/// Upper-tail probability of the Kolmogorov distribution,
/// `P(sup |B(t)| > z)` for a Brownian bridge `B`.
///
/// Evaluated with the alternating series
/// `2 Σₖ (−1)^(k−1) exp(−2 k² z²)`, truncated once terms fall below
/// 1e-12. Shared by the two-sample Kolmogorov-Smirnov test and the
/// CUSUM structural-break test, whose limiting processes are both
/// bridge suprema.
pub fn kolmogorov_sf(z: f64) -> f64 {
    if z <= 0.0 {
        return 1.0;
    }
    if z > 8.0 {
        return 0.0;
    }

    let z_sq = z * z;
    let mut sum = 0.0;
    for k in 1..=100u32 {
        let kf = f64::from(k);
        let term = (-1.0f64).powi(k as i32 - 1) * (-2.0 * kf * kf * z_sq).exp();
        sum += term;
        if term.abs() < 1e-12 {
            break;
        }
    }

    (2.0 * sum).clamp(0.0, 1.0)
}
