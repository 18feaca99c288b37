//! Copper solvent-extraction circuit optimization.
//!
//! Two countercurrent circuits share one organic inventory: extraction loads
//! copper from the pregnant leach solution onto the organic phase, and
//! stripping transfers it into the electrowinning electrolyte. The free
//! parameter tying them together is the reagent concentration (volume
//! percent of active extractant): it scales the loading capacity of both
//! circuits, and there is a single concentration at which the stripped
//! organic returned by stripping matches the organic the extraction circuit
//! needs back at its barren end.
//!
//! [`SxCircuit`] finds that concentration and reports the full McCabe–Thiele
//! state of every stage. The computational core is in the internal `core`
//! module; this module provides the [`twine_core::Model`] adapter and a
//! background-execution entry point.

mod core;

pub use self::core::{
    CircuitError, CircuitResult, CurveData, Electrolyte, EquilibriumPoint, ExtractionResult,
    OptimizationResult, OptimizeConfig, OptimizeError, PlsFeed, ProcessInputs, StageEfficiencies,
    StageRecord, StrippingResult,
};

use twine_core::Model;

use crate::support::background::{self, BackgroundTask};

/// Two-circuit countercurrent solvent-extraction optimizer.
///
/// # Example
///
/// ```
/// use sx_models::models::hydromet::sx::{
///     Electrolyte, PlsFeed, ProcessInputs, SxCircuit, StageEfficiencies,
/// };
/// use uom::si::{
///     f64::{MassConcentration, Ratio, VolumeRate},
///     mass_concentration::gram_per_liter,
///     ratio::{percent, ratio},
///     volume_rate::cubic_meter_per_hour,
/// };
///
/// let gpl = MassConcentration::new::<gram_per_liter>;
///
/// let inputs = ProcessInputs {
///     pls: PlsFeed {
///         flow: VolumeRate::new::<cubic_meter_per_hour>(400.0),
///         copper: gpl(7.0),
///         acid: gpl(1.96),
///     },
///     electrolyte: Electrolyte {
///         spent_copper: gpl(35.0),
///         spent_acid: gpl(190.0),
///         advance_copper: gpl(50.0),
///     },
///     max_loading: Ratio::new::<percent>(80.0),
///     oa_ratio: Ratio::new::<ratio>(1.25),
///     extraction_efficiency: StageEfficiencies::new(
///         Ratio::new::<percent>(95.0),
///         Ratio::new::<percent>(95.0),
///     )?,
///     stripping_efficiency: StageEfficiencies::new(
///         Ratio::new::<percent>(98.0),
///         Ratio::new::<percent>(98.0),
///     )?,
/// };
///
/// let result = SxCircuit::default().solve(&inputs)?;
/// let vol_pct = result.reagent.get::<percent>();
/// assert!(vol_pct > 16.0 && vol_pct < 18.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SxCircuit {
    config: OptimizeConfig,
}

impl SxCircuit {
    /// Creates an optimizer with the given configuration.
    #[must_use]
    pub fn new(config: OptimizeConfig) -> Self {
        Self { config }
    }

    /// Solves for the consistent reagent concentration on the calling
    /// thread.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizeError`] when the search fails, converges outside
    /// the plausible reagent band, or the final evaluation at the optimum
    /// fails.
    pub fn solve(&self, inputs: &ProcessInputs) -> Result<OptimizationResult, OptimizeError> {
        self::core::solve(inputs, &self.config, None)
    }

    /// Runs the solve on a background thread.
    ///
    /// The returned task delivers exactly one result and can be cancelled
    /// cooperatively; cancellation surfaces as [`OptimizeError::Cancelled`].
    /// Solves are independent, so any number may run concurrently.
    #[must_use]
    pub fn solve_in_background(
        &self,
        inputs: ProcessInputs,
    ) -> BackgroundTask<OptimizationResult, OptimizeError> {
        let config = self.config;
        background::spawn(move |cancel| self::core::solve(&inputs, &config, Some(cancel)))
    }
}

impl Model for SxCircuit {
    type Input = ProcessInputs;
    type Output = OptimizationResult;
    type Error = OptimizeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
