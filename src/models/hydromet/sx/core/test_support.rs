use uom::si::{
    f64::{MassConcentration, Ratio, VolumeRate},
    mass_concentration::gram_per_liter,
    ratio::{percent, ratio},
    volume_rate::cubic_meter_per_hour,
};

use super::input::{Electrolyte, PlsFeed, ProcessInputs, StageEfficiencies};

/// Baseline plant: 400 m³/h of 7.0 g/L PLS against a 35/50 g/L electrolyte
/// loop, 80% maximum-loading target, extraction O/A of 1.25, and stage
/// efficiencies of 95/95/98/98%.
pub(crate) fn baseline() -> ProcessInputs {
    ProcessInputs {
        pls: PlsFeed {
            flow: VolumeRate::new::<cubic_meter_per_hour>(400.0),
            copper: gpl(7.0),
            acid: gpl(1.96),
        },
        electrolyte: Electrolyte {
            spent_copper: gpl(35.0),
            spent_acid: gpl(190.0),
            advance_copper: gpl(50.0),
        },
        max_loading: Ratio::new::<percent>(80.0),
        oa_ratio: Ratio::new::<ratio>(1.25),
        extraction_efficiency: StageEfficiencies::new_unchecked(
            Ratio::new::<percent>(95.0),
            Ratio::new::<percent>(95.0),
        ),
        stripping_efficiency: StageEfficiencies::new_unchecked(
            Ratio::new::<percent>(98.0),
            Ratio::new::<percent>(98.0),
        ),
    }
}

fn gpl(value: f64) -> MassConcentration {
    MassConcentration::new::<gram_per_liter>(value)
}
