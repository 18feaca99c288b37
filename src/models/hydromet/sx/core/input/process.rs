use uom::si::f64::Ratio;

use super::{Electrolyte, PlsFeed, StageEfficiencies};

/// Complete set of plant operating inputs for one optimization.
///
/// All concentrations and flows are expected to be positive and of sane
/// plant magnitude. The core performs no sanitization beyond what its own
/// numerics require; implausible inputs fail through the error taxonomy
/// rather than being corrected.
#[derive(Debug, Clone, Copy)]
pub struct ProcessInputs {
    /// Pregnant leach solution feeding the extraction circuit.
    pub pls: PlsFeed,

    /// Electrowinning electrolyte loop bounding the stripping circuit.
    pub electrolyte: Electrolyte,

    /// Fraction of the maximum organic loading targeted at the loaded end,
    /// in `(0, 1]`.
    pub max_loading: Ratio,

    /// Organic-to-aqueous flow ratio through the extraction stages.
    pub oa_ratio: Ratio,

    /// Extraction stage efficiencies.
    pub extraction_efficiency: StageEfficiencies,

    /// Stripping stage efficiencies.
    pub stripping_efficiency: StageEfficiencies,
}
