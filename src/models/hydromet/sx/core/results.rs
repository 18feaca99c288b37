//! Result types for a solvent-extraction circuit optimization.

use uom::si::{
    f64::{MassConcentration, MassRate, Ratio},
    mass_concentration::gram_per_liter,
};

/// Number of samples reported along an equilibrium curve.
pub(super) const CURVE_SAMPLES: usize = 101;

/// A paired aqueous/organic copper concentration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumPoint {
    /// Copper concentration in the aqueous phase.
    pub aqueous: MassConcentration,

    /// Copper concentration in the organic phase.
    pub organic: MassConcentration,
}

impl EquilibriumPoint {
    /// Creates a point from typed concentrations.
    #[must_use]
    pub fn new(aqueous: MassConcentration, organic: MassConcentration) -> Self {
        Self { aqueous, organic }
    }

    pub(super) fn from_gpl(aqueous: f64, organic: f64) -> Self {
        Self {
            aqueous: MassConcentration::new::<gram_per_liter>(aqueous),
            organic: MassConcentration::new::<gram_per_liter>(organic),
        }
    }
}

/// One mixer-settler stage's McCabe–Thiele construction.
///
/// With `x` the aqueous and `y` the organic concentration, the four points
/// are the corners a stage contributes to the staircase between the
/// operating line and the equilibrium curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageRecord {
    /// Operating point at the aqueous-inlet end of the stage: `(x_in, y_out)`.
    pub inlet: EquilibriumPoint,

    /// Actual settled outlet of the stage: `(x_out, y_out)`.
    pub outlet: EquilibriumPoint,

    /// Operating point at the organic-inlet end of the stage: `(x_out, y_in)`.
    pub organic_inlet: EquilibriumPoint,

    /// Where the outlet would sit if the stage reached equilibrium:
    /// `(x_out, y_eq(x_out))`.
    pub equilibrium: EquilibriumPoint,

    /// Murphree efficiency applied to the stage.
    pub efficiency: Ratio,
}

/// Sampled curves for charting one circuit's McCabe–Thiele diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    /// Equilibrium curve samples over the circuit's aqueous operating range,
    /// filtered to non-negative organic loadings.
    pub equilibrium: Vec<EquilibriumPoint>,

    /// Endpoints of the operating line, barren end first.
    pub operating_line: [EquilibriumPoint; 2],

    /// Staircase polyline through each stage's operating points.
    pub stage_points: Vec<EquilibriumPoint>,
}

/// Mass-balance state of one two-stage countercurrent circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitResult {
    /// Organic loading at the loaded end of the circuit.
    pub loaded_organic: MassConcentration,

    /// Organic loading at the barren end of the circuit.
    ///
    /// For extraction this is the stripped organic the circuit requires back
    /// from stripping; for stripping it is the stripped organic actually
    /// produced. The two agree at a converged optimum.
    pub stripped_organic: MassConcentration,

    /// Aqueous concentration leaving the circuit (raffinate or advance
    /// electrolyte).
    pub aqueous_outlet: MassConcentration,

    /// Fraction of the available copper the circuit transferred.
    pub recovery: Ratio,

    /// Per-stage McCabe–Thiele records, loaded end first.
    pub stages: [StageRecord; 2],

    /// Chart data for the circuit.
    pub curve: CurveData,
}

/// Extraction-circuit results.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Shared circuit state.
    pub circuit: CircuitResult,

    /// Maximum organic loading in equilibrium with the feed.
    pub max_loading: MassConcentration,

    /// Raffinate acid after stoichiometric acid release.
    pub raffinate_acid: MassConcentration,

    /// Copper mass flow transferred out of the aqueous feed.
    pub production: MassRate,
}

/// Stripping-circuit results.
#[derive(Debug, Clone, PartialEq)]
pub struct StrippingResult {
    /// Shared circuit state.
    pub circuit: CircuitResult,

    /// Organic-to-aqueous flow ratio derived from the electrolyte bounds.
    pub oa_ratio: Ratio,

    /// Net copper transfer per volume percent of reagent.
    pub net_transfer: MassConcentration,
}

/// The converged state of the whole flowsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Converged reagent concentration, in volume percent of active
    /// extractant.
    pub reagent: Ratio,

    /// Extraction circuit at the optimum.
    pub extraction: ExtractionResult,

    /// Stripping circuit at the optimum.
    pub stripping: StrippingResult,

    /// Circuit-consistency residual at the optimum; approximately zero.
    pub residual: MassConcentration,
}
