//! Partial-autocorrelation parametrisation of stationary polynomials.

/// Maps unconstrained optimizer parameters to the coefficients of a
/// stationary AR (or invertible MA) polynomial.
///
/// Each parameter is squashed into (-1, 1) with `tanh` and interpreted
/// as a partial autocorrelation; the Durbin recursion then converts the
/// partials to polynomial coefficients whose roots lie outside the unit
/// circle, so the optimizer can search an unconstrained space.
pub(crate) fn stationary_coeffs(unconstrained: &[f64]) -> Vec<f64> {
    let order = unconstrained.len();
    if order == 0 {
        return Vec::new();
    }

    let partials: Vec<f64> = unconstrained.iter().map(|a| a.tanh()).collect();

    let mut coeffs: Vec<f64> = Vec::with_capacity(order);
    for (k, &r) in partials.iter().enumerate() {
        let previous = coeffs.clone();
        coeffs.push(r);
        for j in 0..k {
            coeffs[j] = previous[j] - r * previous[k - 1 - j];
        }
    }

    coeffs
}
