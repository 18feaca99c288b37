//! Extraction circuit: two countercurrent mixer-settler stages loading
//! copper from the PLS onto the organic phase.
//!
//! Organic flows stage 2 → stage 1 while aqueous flows stage 1 → stage 2, so
//! stage 1 discharges the loaded organic and stage 2 the raffinate. The
//! loaded-organic target is fixed by the maximum-loading fraction; each
//! stage's aqueous outlet is then found with the secant solver.

use uom::si::{
    f64::{MassConcentration, Ratio},
    mass_concentration::gram_per_liter,
    ratio::ratio,
};

use super::{
    error::CircuitError,
    input::ProcessInputs,
    isotherm::{ACID_PER_COPPER, Isotherm},
    results::{CURVE_SAMPLES, CircuitResult, CurveData, EquilibriumPoint, ExtractionResult},
    stage::Stage,
};

/// Aqueous-outlet search seeds, as fractions of each stage's aqueous inlet.
const STAGE1_SEED: f64 = 0.3;
const STAGE2_SEED: f64 = 0.15;

/// Simulates the extraction circuit at one trial reagent concentration.
///
/// # Errors
///
/// Returns a [`CircuitError`] when a stage solve fails or the isotherm
/// degenerates.
pub(super) fn simulate(
    inputs: &ProcessInputs,
    vol_pct: f64,
) -> Result<ExtractionResult, CircuitError> {
    let isotherm = Isotherm::extraction(inputs, vol_pct);
    let feed_cu = inputs.pls.copper.get::<gram_per_liter>();
    let feed_acid = inputs.pls.acid.get::<gram_per_liter>();
    let oa_ratio = inputs.oa_ratio.get::<ratio>();
    let eff1 = inputs.extraction_efficiency.stage1().get::<ratio>();
    let eff2 = inputs.extraction_efficiency.stage2().get::<ratio>();

    let max_loading = isotherm.organic_from_aqueous(feed_cu)?;
    let loaded = max_loading * inputs.max_loading.get::<ratio>();

    let (stage1, stage2) = if feed_cu == 0.0 {
        // A barren feed loads nothing; there is no aqueous outlet to search
        // for. The inconsistency this creates is reported by the stripping
        // circuit, which receives a loaded organic of zero.
        (Stage::idle(eff1), Stage::idle(eff2))
    } else {
        let stage1 = Stage::solve_aqueous_outlet(
            &isotherm,
            1,
            feed_cu,
            loaded,
            eff1,
            oa_ratio,
            STAGE1_SEED * feed_cu,
        )?;
        let stage2 = Stage::solve_aqueous_outlet(
            &isotherm,
            2,
            stage1.x_out,
            stage1.y_in,
            eff2,
            oa_ratio,
            STAGE2_SEED * stage1.x_out,
        )?;
        (stage1, stage2)
    };

    let stripped = stage2.y_in;
    let raffinate = stage2.x_out;
    let recovered = if feed_cu > 0.0 {
        (feed_cu - raffinate) / feed_cu
    } else {
        0.0
    };

    let curve = CurveData {
        equilibrium: sample_equilibrium(&isotherm, feed_cu)?,
        operating_line: [
            EquilibriumPoint::from_gpl(raffinate, stripped),
            EquilibriumPoint::from_gpl(feed_cu, loaded),
        ],
        stage_points: [stage1.staircase_points(), stage2.staircase_points()]
            .concat(),
    };

    Ok(ExtractionResult {
        circuit: CircuitResult {
            loaded_organic: MassConcentration::new::<gram_per_liter>(loaded),
            stripped_organic: MassConcentration::new::<gram_per_liter>(stripped),
            aqueous_outlet: MassConcentration::new::<gram_per_liter>(raffinate),
            recovery: Ratio::new::<ratio>(recovered),
            stages: [stage1.record(), stage2.record()],
            curve,
        },
        max_loading: MassConcentration::new::<gram_per_liter>(max_loading),
        raffinate_acid: MassConcentration::new::<gram_per_liter>(
            feed_acid + ACID_PER_COPPER * (feed_cu - raffinate),
        ),
        production: inputs.pls.flow
            * (inputs.pls.copper - MassConcentration::new::<gram_per_liter>(raffinate)),
    })
}

/// Samples the equilibrium curve over `[0, feed_cu]`, dropping any point
/// with a negative organic loading.
fn sample_equilibrium(
    isotherm: &Isotherm,
    feed_cu: f64,
) -> Result<Vec<EquilibriumPoint>, CircuitError> {
    let mut samples = Vec::with_capacity(CURVE_SAMPLES);
    for i in 0..CURVE_SAMPLES {
        let aqueous = feed_cu * i as f64 / (CURVE_SAMPLES - 1) as f64;
        let organic = isotherm.organic_from_aqueous(aqueous)?;
        if organic >= 0.0 {
            samples.push(EquilibriumPoint::from_gpl(aqueous, organic));
        }
    }
    Ok(samples)
}
