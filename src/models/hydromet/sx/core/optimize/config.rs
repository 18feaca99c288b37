use uom::si::{f64::Ratio, ratio::percent};

use crate::support::secant::SecantConfig;

/// Configuration for the reagent-concentration optimization.
#[derive(Debug, Clone, Copy)]
pub struct OptimizeConfig {
    /// Reagent concentration the outer search starts from.
    ///
    /// The default of 17.1 vol% is an empirically reasonable operating point
    /// for oxime reagent systems.
    pub initial_guess: Ratio,

    /// Largest reagent concentration accepted as a plausible optimum.
    ///
    /// A search that converges above this bound (or at zero or below) is
    /// rejected rather than reported as a result.
    pub max_reagent: Ratio,

    /// Outer secant search configuration.
    pub search: SecantConfig,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            initial_guess: Ratio::new::<percent>(17.1),
            max_reagent: Ratio::new::<percent>(50.0),
            search: SecantConfig::default(),
        }
    }
}
