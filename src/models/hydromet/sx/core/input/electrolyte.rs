use uom::si::f64::MassConcentration;

use crate::support::constraint::{ConstraintResult, StrictlyPositive};

/// The electrowinning electrolyte loop bounding the stripping circuit.
///
/// Spent electrolyte returns from electrowinning to strip the organic;
/// advance electrolyte carries the recovered copper back to the cells.
#[derive(Debug, Clone, Copy)]
pub struct Electrolyte {
    /// Copper in the spent electrolyte entering the stripping circuit.
    pub spent_copper: MassConcentration,

    /// Sulfuric acid in the spent electrolyte.
    pub spent_acid: MassConcentration,

    /// Copper in the advance electrolyte leaving the stripping circuit.
    pub advance_copper: MassConcentration,
}

impl Electrolyte {
    /// Constructs a validated electrolyte loop.
    ///
    /// # Errors
    ///
    /// Returns an error if any concentration is not strictly positive.
    pub fn new(
        spent_copper: MassConcentration,
        spent_acid: MassConcentration,
        advance_copper: MassConcentration,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            spent_copper: StrictlyPositive::new(spent_copper)?.into_inner(),
            spent_acid: StrictlyPositive::new(spent_acid)?.into_inner(),
            advance_copper: StrictlyPositive::new(advance_copper)?.into_inner(),
        })
    }
}
