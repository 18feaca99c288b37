//! Stripping circuit: two countercurrent mixer-settler stages transferring
//! copper from the loaded organic into the electrolyte loop.
//!
//! Organic flows stage 1 → stage 2 carrying the extraction circuit's loaded
//! organic; the aqueous electrolyte flows stage 2 → stage 1, entering spent
//! and leaving as advance electrolyte. Unlike extraction, both stages are
//! closed form: the aqueous outlets are pinned by the electrolyte bounds and
//! the chained mass balance, so only the efficiency weighting applies.

use uom::si::{
    f64::{MassConcentration, Ratio},
    mass_concentration::gram_per_liter,
    ratio::ratio,
};

use super::{
    error::CircuitError,
    input::ProcessInputs,
    isotherm::Isotherm,
    results::{CURVE_SAMPLES, CircuitResult, CurveData, EquilibriumPoint, StrippingResult},
    stage::Stage,
};

/// Simulates the stripping circuit at one trial reagent concentration.
///
/// `loaded` is the loaded organic delivered by the extraction circuit and
/// `stripped_required` the stripped organic that circuit requires back; both
/// in g/L. The stripping O/A ratio is derived from them and the electrolyte
/// bounds rather than being an input.
///
/// # Errors
///
/// Returns [`CircuitError::Inconsistent`] when `loaded` does not strictly
/// exceed `stripped_required`, since the derived O/A ratio is then
/// meaningless.
pub(super) fn simulate(
    inputs: &ProcessInputs,
    vol_pct: f64,
    loaded: f64,
    stripped_required: f64,
) -> Result<StrippingResult, CircuitError> {
    if loaded <= stripped_required {
        return Err(CircuitError::Inconsistent {
            loaded: MassConcentration::new::<gram_per_liter>(loaded),
            stripped: MassConcentration::new::<gram_per_liter>(stripped_required),
        });
    }

    let isotherm = Isotherm::stripping(inputs, vol_pct);
    let spent = inputs.electrolyte.spent_copper.get::<gram_per_liter>();
    let advance = inputs.electrolyte.advance_copper.get::<gram_per_liter>();
    let eff1 = inputs.stripping_efficiency.stage1().get::<ratio>();
    let eff2 = inputs.stripping_efficiency.stage2().get::<ratio>();

    let oa_ratio = (advance - spent) / (loaded - stripped_required);

    // Stage 1: organic enters loaded; the aqueous outlet is the advance
    // electrolyte.
    let y_eq1 = isotherm.organic_from_aqueous(advance)?;
    let y_out1 = loaded + eff1 * (y_eq1 - loaded);
    let x_mid = advance - oa_ratio * (loaded - y_out1);
    let stage1 = Stage {
        x_in: x_mid,
        x_out: advance,
        y_in: loaded,
        y_out: y_out1,
        y_eq: y_eq1,
        efficiency: eff1,
    };

    // Stage 2: chained from stage 1's aqueous inlet.
    let y_eq2 = isotherm.organic_from_aqueous(x_mid)?;
    let stripped = y_out1 + eff2 * (y_eq2 - y_out1);
    let x_back = x_mid - oa_ratio * (y_out1 - stripped);
    let stage2 = Stage {
        x_in: x_back,
        x_out: x_mid,
        y_in: y_out1,
        y_out: stripped,
        y_eq: y_eq2,
        efficiency: eff2,
    };

    let curve = CurveData {
        equilibrium: sample_equilibrium(&isotherm, spent, advance)?,
        operating_line: [
            EquilibriumPoint::from_gpl(spent, stripped),
            EquilibriumPoint::from_gpl(advance, loaded),
        ],
        stage_points: [stage1.staircase_points(), stage2.staircase_points()]
            .concat(),
    };

    Ok(StrippingResult {
        circuit: CircuitResult {
            loaded_organic: MassConcentration::new::<gram_per_liter>(loaded),
            stripped_organic: MassConcentration::new::<gram_per_liter>(stripped),
            aqueous_outlet: MassConcentration::new::<gram_per_liter>(advance),
            recovery: Ratio::new::<ratio>((loaded - stripped) / loaded),
            stages: [stage1.record(), stage2.record()],
            curve,
        },
        oa_ratio: Ratio::new::<ratio>(oa_ratio),
        net_transfer: MassConcentration::new::<gram_per_liter>((loaded - stripped) / vol_pct),
    })
}

/// Samples the equilibrium curve over the electrolyte operating window,
/// dropping any point with a negative organic loading.
fn sample_equilibrium(
    isotherm: &Isotherm,
    spent: f64,
    advance: f64,
) -> Result<Vec<EquilibriumPoint>, CircuitError> {
    let mut samples = Vec::with_capacity(CURVE_SAMPLES);
    for i in 0..CURVE_SAMPLES {
        let aqueous = spent + (advance - spent) * i as f64 / (CURVE_SAMPLES - 1) as f64;
        let organic = isotherm.organic_from_aqueous(aqueous)?;
        if organic >= 0.0 {
            samples.push(EquilibriumPoint::from_gpl(aqueous, organic));
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::hydromet::sx::core::test_support::baseline;

    const VOL_PCT: f64 = 17.1;

    // Extraction-circuit couplings computed at the same reagent
    // concentration.
    const LOADED: f64 = 6.774_094_982_443_056_5;
    const STRIPPED_REQUIRED: f64 = 1.829_262_828_965_940_3;

    #[test]
    fn matches_reference_circuit_state() {
        let result = simulate(&baseline(), VOL_PCT, LOADED, STRIPPED_REQUIRED).unwrap();

        assert_relative_eq!(
            result.oa_ratio.get::<ratio>(),
            3.033_470,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            result.circuit.stripped_organic.get::<gram_per_liter>(),
            1.830_480,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            result.net_transfer.get::<gram_per_liter>(),
            (LOADED - 1.830_480) / VOL_PCT,
            epsilon = 1e-4
        );
    }

    #[test]
    fn aqueous_loop_returns_near_the_spent_electrolyte() {
        let inputs = baseline();
        let result = simulate(&inputs, VOL_PCT, LOADED, STRIPPED_REQUIRED).unwrap();

        // Stage 2's aqueous inlet is the electrolyte returning from
        // electrowinning; at a consistent operating point it reproduces the
        // spent concentration.
        let x_back = result.circuit.stages[1].inlet.aqueous.get::<gram_per_liter>();
        assert_relative_eq!(x_back, 35.0, epsilon = 0.05);
    }

    #[test]
    fn organic_unloads_monotonically_through_the_stages() {
        let result = simulate(&baseline(), VOL_PCT, LOADED, STRIPPED_REQUIRED).unwrap();

        let y_out1 = result.circuit.stages[0].outlet.organic.get::<gram_per_liter>();
        let stripped = result.circuit.stripped_organic.get::<gram_per_liter>();
        assert!(LOADED > y_out1, "stage 1 must unload the organic");
        assert!(y_out1 > stripped, "stage 2 must keep unloading");
        assert!(stripped > 0.0);
    }

    #[test]
    fn rejects_non_positive_net_transfer() {
        let inputs = baseline();

        let result = simulate(&inputs, VOL_PCT, 0.0, 0.0);
        assert!(matches!(result, Err(CircuitError::Inconsistent { .. })));

        let result = simulate(&inputs, VOL_PCT, 2.0, 2.5);
        assert!(matches!(result, Err(CircuitError::Inconsistent { .. })));
    }

    #[test]
    fn curve_spans_the_electrolyte_window() {
        let result = simulate(&baseline(), VOL_PCT, LOADED, STRIPPED_REQUIRED).unwrap();
        let curve = &result.circuit.curve;

        assert_eq!(curve.equilibrium.len(), CURVE_SAMPLES);
        assert_relative_eq!(curve.equilibrium[0].aqueous.get::<gram_per_liter>(), 35.0);
        assert_relative_eq!(
            curve.equilibrium[CURVE_SAMPLES - 1]
                .aqueous
                .get::<gram_per_liter>(),
            50.0
        );
    }
}
