//! Closed-form real-root extraction for cubic equations.
//!
//! This is not a general cubic solver: it returns exactly one real root,
//! selected by a fixed branch policy, and callers that depend on it (the
//! equilibrium isotherm) rely on that policy matching the physically valid
//! branch of their equation. See [`real_root`] for the policy.

/// Returns one real root of `a·x³ + b·x² + c·x + d = 0`, or `None` when the
/// leading coefficient vanishes and the equation is not a cubic.
///
/// The equation is reduced to depressed form. When the discriminant-related
/// quantity `q²/4 + p³/27` is non-negative the single real root is computed
/// as the Cardano sum of cube roots. When it is negative (three real roots)
/// only the first trigonometric root `2·∛r·cos(φ/3) − b/(3a)` is returned,
/// which is always the largest of the three. Downstream mass balances depend
/// on this exact selection; do not substitute another root-finding strategy.
#[must_use]
pub fn real_root(a: f64, b: f64, c: f64, d: f64) -> Option<f64> {
    if a.abs() < f64::EPSILON {
        return None;
    }

    let p = c / a - b * b / (3.0 * a * a);
    let q = 2.0 * b.powi(3) / (27.0 * a.powi(3)) - b * c / (3.0 * a * a) + d / a;
    let shift = b / (3.0 * a);

    let term1 = q / 2.0;
    let term2 = q * q / 4.0 + p.powi(3) / 27.0;

    if term2 >= 0.0 {
        let sqrt_term2 = term2.sqrt();
        Some((-term1 + sqrt_term2).cbrt() + (-term1 - sqrt_term2).cbrt() - shift)
    } else {
        let r = (-p.powi(3) / 27.0).sqrt();
        let phi = (-q / (2.0 * r)).acos();
        Some(2.0 * r.cbrt() * (phi / 3.0).cos() - shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_real_root() {
        // (x - 2)(x² + x + 1) = x³ - x² - x - 2
        let root = real_root(1.0, -1.0, -1.0, -2.0).unwrap();
        assert_relative_eq!(root, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn three_real_roots_returns_largest() {
        // (x - 1)(x - 2)(x - 3) = x³ - 6x² + 11x - 6
        let root = real_root(1.0, -6.0, 11.0, -6.0).unwrap();
        assert_relative_eq!(root, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn scaled_coefficients_leave_roots_unchanged() {
        let unscaled = real_root(1.0, -6.0, 11.0, -6.0).unwrap();
        let scaled = real_root(-2.0, 12.0, -22.0, 12.0).unwrap();
        assert_relative_eq!(unscaled, scaled, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_leading_coefficient() {
        assert!(real_root(0.0, 1.0, 1.0, 1.0).is_none());
    }

    #[test]
    fn root_satisfies_equation() {
        let (a, b, c, d) = (1.0, 2.5, -7.0, 0.5);
        let x = real_root(a, b, c, d).unwrap();
        let value = a * x.powi(3) + b * x * x + c * x + d;
        assert_relative_eq!(value, 0.0, epsilon = 1e-9);
    }
}
