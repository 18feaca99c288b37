//! Scalar root finding with the secant method.
//!
//! Tailored to the objective functions produced by this crate's models:
//! well-behaved, single-rooted, and defined on strictly positive arguments
//! (concentrations and volume percentages). The iteration therefore fails
//! fast as soon as a candidate leaves the positive reals, rather than trying
//! to recover.

use thiserror::Error;

/// Configuration for a secant solve.
#[derive(Debug, Clone, Copy)]
pub struct SecantConfig {
    /// Absolute tolerance on the objective value at the returned root.
    pub tolerance: f64,

    /// Maximum iteration count before the solve is abandoned.
    pub max_iters: usize,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            max_iters: 100,
        }
    }
}

/// A converged secant solve.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Argument at which the objective met the tolerance.
    pub root: f64,

    /// Objective value at [`root`](Self::root).
    pub residual: f64,

    /// Iterations performed after the two seed evaluations.
    pub iters: usize,
}

/// Errors that can occur during a secant solve.
///
/// Failures are reported to the caller as-is. The solver never retries with
/// different seeds or relaxed tolerances; if a retry policy is wanted it
/// belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SecantError {
    /// A candidate iterate became non-finite or non-positive.
    #[error("iterate became non-finite or non-positive ({candidate}) after {iters} iterations")]
    Diverged {
        /// The offending candidate value.
        candidate: f64,

        /// Iterations performed before the candidate was produced.
        iters: usize,
    },

    /// The iteration budget was exhausted without meeting the tolerance.
    #[error("no convergence within {iters} iterations (residual {residual})")]
    IterationLimit {
        /// Objective value at the last iterate.
        residual: f64,

        /// Iterations performed.
        iters: usize,
    },
}

/// Searches for a zero of `objective` near `initial_guess`.
///
/// Two seed points are taken at `initial_guess ± 0.1`; since the domain is
/// strictly positive, a non-positive lower seed is clamped to `0.1`.
///
/// # Errors
///
/// Returns [`SecantError::Diverged`] if a candidate iterate is non-finite or
/// non-positive, and [`SecantError::IterationLimit`] if `max_iters` updates
/// pass without the objective dropping below the tolerance.
pub fn solve(
    mut objective: impl FnMut(f64) -> f64,
    initial_guess: f64,
    config: &SecantConfig,
) -> Result<Solution, SecantError> {
    let mut x0 = initial_guess - 0.1;
    if x0 <= 0.0 {
        x0 = 0.1;
    }
    let mut x1 = initial_guess + 0.1;

    let mut f0 = objective(x0);
    let mut f1 = objective(x1);
    let mut iters = 0;

    loop {
        if f1.abs() < config.tolerance {
            return Ok(Solution {
                root: x1,
                residual: f1,
                iters,
            });
        }
        if iters >= config.max_iters {
            return Err(SecantError::IterationLimit {
                residual: f1,
                iters,
            });
        }

        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        if !x2.is_finite() || x2 <= 0.0 {
            return Err(SecantError::Diverged {
                candidate: x2,
                iters,
            });
        }

        (x0, f0) = (x1, f1);
        x1 = x2;
        f1 = objective(x1);
        iters += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root() {
        let solution = solve(|x| x * x - 4.0, 1.0, &SecantConfig::default()).unwrap();
        assert_relative_eq!(solution.root, 2.0, epsilon = 1e-6);
        assert!(solution.residual.abs() < 1e-7);
        assert_eq!(solution.iters, 6);
    }

    #[test]
    fn finds_cosine_fixed_point() {
        let solution = solve(|x| x.cos() - x, 1.0, &SecantConfig::default()).unwrap();
        assert_relative_eq!(solution.root, 0.739_085_133, epsilon = 1e-6);
    }

    #[test]
    fn clamps_lower_seed_into_positive_domain() {
        // Guess of 0.05 puts the lower seed at -0.05; the clamp moves it to
        // 0.1 and the solve still converges to the positive root.
        let solution = solve(|x| x - 0.5, 0.05, &SecantConfig::default()).unwrap();
        assert_relative_eq!(solution.root, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn rejects_non_positive_candidate() {
        // Root at -10: the first secant update lands there and is rejected.
        let result = solve(|x| x + 10.0, 1.0, &SecantConfig::default());
        assert!(matches!(
            result,
            Err(SecantError::Diverged { candidate, .. }) if candidate <= 0.0
        ));
    }

    #[test]
    fn rejects_non_finite_candidate() {
        // A flat objective makes the update divide by zero.
        let result = solve(|_| 1.0, 1.0, &SecantConfig::default());
        assert!(matches!(result, Err(SecantError::Diverged { .. })));
    }

    #[test]
    fn reports_iteration_limit() {
        let config = SecantConfig {
            tolerance: 1e-12,
            max_iters: 2,
        };
        let result = solve(|x| (x - 2.0).exp() - 1.0, 30.0, &config);
        assert!(matches!(
            result,
            Err(SecantError::IterationLimit { iters: 2, .. })
        ));
    }
}
