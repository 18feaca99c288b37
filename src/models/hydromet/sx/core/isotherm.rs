//! Semi-empirical copper distribution isotherms.
//!
//! Both circuits share one implicit equilibrium relation between the aqueous
//! copper concentration `x` and the organic loading `y`, in g/L:
//!
//! ```text
//! (a + b·x)²/x  =  (e·y + f)·(c + d·y)²/y
//! ```
//!
//! The left side tracks the acid/copper balance of the aqueous phase; the
//! right side tracks free reagent capacity on the organic side, with
//! `(e·y + f)` acting as a loading cutoff (`e` is negative). The six
//! constants are derived from the plant inputs and the trial reagent
//! concentration, with different derivations per circuit.
//!
//! Solving the relation for `y` at fixed `x` is a monic cubic; the cutoff
//! guarantees exactly one positive real root over the operating range, which
//! is the root [`cubic::real_root`] returns. Solving for `x` at fixed `y` is
//! a quadratic whose smaller root is the branch with free acid remaining.

use uom::si::mass_concentration::gram_per_liter;

use crate::support::cubic;

use super::{error::CircuitError, input::ProcessInputs};

/// Mass of sulfuric acid exchanged per mass of copper transferred.
pub(super) const ACID_PER_COPPER: f64 = 1.54;

/// Organic loading capacity per volume percent of reagent, g/L.
const CAPACITY_PER_VOL_PCT: f64 = 0.58;

/// Reagent concentration the correction factors are normalized to, vol%.
const REFERENCE_VOL_PCT: f64 = 10.0;

// Correction-factor fit. The exponents are properties of the reagent
// chemistry; the prefactors come from regressing plant operating data.
const EXTRACT_STRENGTH: f64 = 12.0;
const EXTRACT_STRENGTH_EXP: f64 = -1.704;
const EXTRACT_CUTOFF: f64 = 59.5;
const EXTRACT_CUTOFF_EXP: f64 = -0.608;
const STRIP_STRENGTH_BASE: f64 = 2.25;
const STRIP_STRENGTH_SLOPE: f64 = 0.35;
const STRIP_CUTOFF: f64 = 67.2;
const STRIP_CUTOFF_EXP: f64 = -0.901;

/// The six constants fixing one circuit's equilibrium curve.
///
/// Recomputed from scratch for every trial reagent concentration; a set of
/// constants is never reused across trials.
#[derive(Debug, Clone, Copy)]
struct IsothermConstants {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

/// A circuit's equilibrium curve at one trial reagent concentration.
#[derive(Debug, Clone, Copy)]
pub(super) struct Isotherm {
    constants: IsothermConstants,
}

impl Isotherm {
    /// Derives the extraction-circuit isotherm.
    pub(super) fn extraction(inputs: &ProcessInputs, vol_pct: f64) -> Self {
        let feed_cu = inputs.pls.copper.get::<gram_per_liter>();
        let feed_acid = inputs.pls.acid.get::<gram_per_liter>();
        let relative = vol_pct / REFERENCE_VOL_PCT;

        Self {
            constants: IsothermConstants {
                a: feed_acid + ACID_PER_COPPER * feed_cu,
                b: -ACID_PER_COPPER,
                c: CAPACITY_PER_VOL_PCT * vol_pct,
                d: -1.0,
                e: -EXTRACT_STRENGTH * relative.powf(EXTRACT_STRENGTH_EXP),
                f: EXTRACT_CUTOFF * relative.powf(EXTRACT_CUTOFF_EXP),
            },
        }
    }

    /// Derives the stripping-circuit isotherm.
    pub(super) fn stripping(inputs: &ProcessInputs, vol_pct: f64) -> Self {
        let spent_cu = inputs.electrolyte.spent_copper.get::<gram_per_liter>();
        let spent_acid = inputs.electrolyte.spent_acid.get::<gram_per_liter>();
        let relative = vol_pct / REFERENCE_VOL_PCT;

        Self {
            constants: IsothermConstants {
                a: spent_acid + ACID_PER_COPPER * spent_cu,
                b: -ACID_PER_COPPER,
                c: CAPACITY_PER_VOL_PCT * vol_pct,
                d: -1.0,
                e: -(STRIP_STRENGTH_BASE + STRIP_STRENGTH_SLOPE * vol_pct),
                f: STRIP_CUTOFF * relative.powf(STRIP_CUTOFF_EXP),
            },
        }
    }

    /// Organic loading in equilibrium with the given aqueous concentration.
    ///
    /// Non-positive aqueous concentrations map to zero loading.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::DegenerateIsotherm`] if the cubic degenerates,
    /// which cannot happen for valid constants.
    pub(super) fn organic_from_aqueous(&self, aqueous: f64) -> Result<f64, CircuitError> {
        if aqueous <= 0.0 {
            return Ok(0.0);
        }

        let IsothermConstants { a, b, c, d, e, f } = self.constants;
        let g = (a + b * aqueous).powi(2) / aqueous;

        let alpha = 2.0 * c / d + f / e;
        let lambda = (e * c * c + 2.0 * c * d * f - g) / (e * d * d);
        let epsilon = f * c * c / (e * d * d);

        cubic::real_root(1.0, alpha, lambda, epsilon)
            .ok_or(CircuitError::DegenerateIsotherm { aqueous })
    }

    /// Aqueous concentration in equilibrium with the given organic loading,
    /// or `None` when no real concentration corresponds to it under the
    /// current constants.
    ///
    /// Non-positive loadings map to zero.
    pub(super) fn aqueous_from_organic(&self, organic: f64) -> Option<f64> {
        if organic <= 0.0 {
            return Some(0.0);
        }

        let IsothermConstants { a, b, c, d, e, f } = self.constants;
        let h = (e * organic + f) * (c + d * organic).powi(2) / organic;

        let quad_a = b * b;
        let quad_b = 2.0 * a * b - h;
        let quad_c = a * a;

        let discriminant = quad_b * quad_b - 4.0 * quad_a * quad_c;
        if discriminant < 0.0 {
            return None;
        }

        Some((h - 2.0 * a * b - discriminant.sqrt()) / (2.0 * quad_a))
    }
}
