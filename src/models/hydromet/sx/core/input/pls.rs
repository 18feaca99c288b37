use uom::si::f64::{MassConcentration, VolumeRate};

use crate::support::constraint::{ConstraintResult, StrictlyPositive};

/// Pregnant leach solution feeding the extraction circuit.
///
/// All values are expected to be strictly positive. Fields are public for
/// direct construction; [`PlsFeed::new`] additionally validates them.
#[derive(Debug, Clone, Copy)]
pub struct PlsFeed {
    /// Volumetric feed flow.
    pub flow: VolumeRate,

    /// Dissolved copper in the feed.
    pub copper: MassConcentration,

    /// Free sulfuric acid in the feed.
    pub acid: MassConcentration,
}

impl PlsFeed {
    /// Constructs a validated feed.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not strictly positive.
    pub fn new(
        flow: VolumeRate,
        copper: MassConcentration,
        acid: MassConcentration,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            flow: StrictlyPositive::new(flow)?.into_inner(),
            copper: StrictlyPositive::new(copper)?.into_inner(),
            acid: StrictlyPositive::new(acid)?.into_inner(),
        })
    }
}
