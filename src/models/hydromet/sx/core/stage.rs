//! Bookkeeping for one countercurrent mixer-settler stage.
//!
//! A stage mixes an incoming aqueous stream (`x_in`) with an incoming
//! organic stream (`y_in`) and settles into outlets `x_out` and `y_out`.
//! The countercurrent mass balance ties the four together through the
//! organic-to-aqueous flow ratio, and the Murphree efficiency fixes how far
//! the organic outlet approaches the equilibrium loading `y_eq(x_out)`:
//!
//! ```text
//! y_in  = y_out − (x_in − x_out)/(O/A)
//! y_out − y_in = efficiency · (y_eq(x_out) − y_in)
//! ```

use crate::support::secant::{self, SecantConfig};

use super::{
    error::CircuitError,
    isotherm::Isotherm,
    results::{EquilibriumPoint, StageRecord},
};
use uom::si::{f64::Ratio, ratio::ratio};

/// Settled state of one stage, in g/L magnitudes.
#[derive(Debug, Clone, Copy)]
pub(super) struct Stage {
    pub(super) x_in: f64,
    pub(super) x_out: f64,
    pub(super) y_in: f64,
    pub(super) y_out: f64,
    pub(super) y_eq: f64,
    pub(super) efficiency: f64,
}

impl Stage {
    /// Solves a stage whose organic outlet is fixed, searching for the
    /// aqueous outlet that satisfies the efficiency-weighted approach to
    /// equilibrium.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::StageSolve`] when the secant search fails;
    /// isotherm failures inside the search surface the same way, as a
    /// diverged candidate.
    pub(super) fn solve_aqueous_outlet(
        isotherm: &Isotherm,
        index: usize,
        x_in: f64,
        y_out: f64,
        efficiency: f64,
        oa_ratio: f64,
        seed: f64,
    ) -> Result<Self, CircuitError> {
        let objective = |x_out: f64| {
            let y_in = y_out - (x_in - x_out) / oa_ratio;
            let y_eq = isotherm.organic_from_aqueous(x_out).unwrap_or(f64::NAN);
            (y_out - y_in) - efficiency * (y_eq - y_in)
        };

        let solution = secant::solve(objective, seed, &SecantConfig::default()).map_err(
            |source| CircuitError::StageSolve {
                stage: index,
                source,
            },
        )?;

        let x_out = solution.root;
        let y_in = y_out - (x_in - x_out) / oa_ratio;
        let y_eq = isotherm.organic_from_aqueous(x_out)?;

        Ok(Self {
            x_in,
            x_out,
            y_in,
            y_out,
            y_eq,
            efficiency,
        })
    }

    /// A stage carrying no copper at all.
    pub(super) fn idle(efficiency: f64) -> Self {
        Self {
            x_in: 0.0,
            x_out: 0.0,
            y_in: 0.0,
            y_out: 0.0,
            y_eq: 0.0,
            efficiency,
        }
    }

    /// The stage's McCabe–Thiele record.
    pub(super) fn record(&self) -> StageRecord {
        StageRecord {
            inlet: EquilibriumPoint::from_gpl(self.x_in, self.y_out),
            outlet: EquilibriumPoint::from_gpl(self.x_out, self.y_out),
            organic_inlet: EquilibriumPoint::from_gpl(self.x_out, self.y_in),
            equilibrium: EquilibriumPoint::from_gpl(self.x_out, self.y_eq),
            efficiency: Ratio::new::<ratio>(self.efficiency),
        }
    }

    /// The stage's corner points on the staircase polyline.
    pub(super) fn staircase_points(&self) -> [EquilibriumPoint; 3] {
        let record = self.record();
        [record.inlet, record.outlet, record.organic_inlet]
    }
}
