//! Outer consistency search over the reagent concentration.
//!
//! For a trial reagent concentration the extraction circuit fixes both the
//! loaded organic it delivers and the stripped organic it requires back; the
//! stripping circuit, fed the same couplings, reports the stripped organic
//! it actually produces. The circuits agree when the residual between the
//! two stripped-organic values is zero, and the secant solver searches the
//! reagent concentration for that zero.

mod config;

pub use config::OptimizeConfig;

use uom::si::{
    f64::{MassConcentration, Ratio},
    mass_concentration::gram_per_liter,
    ratio::percent,
};

use crate::support::{background::CancelFlag, secant};

use super::{
    error::{CircuitError, OptimizeError},
    extraction,
    input::ProcessInputs,
    results::OptimizationResult,
    stripping,
};

/// Objective value reported for trial evaluations that fail internally.
///
/// Large enough to steer the search back toward feasible reagent
/// concentrations instead of aborting it.
const INFEASIBLE: f64 = 1e6;

/// Searches for the reagent concentration that makes the circuits
/// consistent, then evaluates both circuits once more at the optimum.
///
/// Every trial is an independent, pure evaluation; nothing is cached across
/// trials except the scalar being searched.
///
/// # Errors
///
/// - [`OptimizeError::Search`] when the outer search diverges or exhausts
///   its iteration budget.
/// - [`OptimizeError::OutOfRange`] when the search converges outside the
///   plausible reagent band.
/// - [`OptimizeError::Evaluate`] when the final evaluation at the chosen
///   optimum fails; unlike trial failures this is fatal.
/// - [`OptimizeError::Cancelled`] when `cancel` was flagged mid-solve.
pub(crate) fn solve(
    inputs: &ProcessInputs,
    config: &OptimizeConfig,
    cancel: Option<&CancelFlag>,
) -> Result<OptimizationResult, OptimizeError> {
    let cancelled = || cancel.is_some_and(CancelFlag::is_cancelled);

    let objective = |vol_pct: f64| {
        if cancelled() {
            // A non-finite objective stops the search on its next update.
            return f64::NAN;
        }
        residual(inputs, vol_pct).unwrap_or(INFEASIBLE)
    };

    let guess = config.initial_guess.get::<percent>();
    let solution = match secant::solve(objective, guess, &config.search) {
        Ok(solution) => solution,
        Err(_) if cancelled() => return Err(OptimizeError::Cancelled),
        Err(error) => return Err(error.into()),
    };

    let vol_pct = solution.root;
    let max = config.max_reagent.get::<percent>();
    if vol_pct <= 0.0 || vol_pct > max {
        return Err(OptimizeError::OutOfRange {
            found: Ratio::new::<percent>(vol_pct),
            max: config.max_reagent,
        });
    }

    if cancelled() {
        return Err(OptimizeError::Cancelled);
    }

    // Final evaluation at the optimum; errors here surface to the caller.
    let extraction = extraction::simulate(inputs, vol_pct)?;
    let loaded = extraction.circuit.loaded_organic.get::<gram_per_liter>();
    let required = extraction.circuit.stripped_organic.get::<gram_per_liter>();
    let stripping = stripping::simulate(inputs, vol_pct, loaded, required)?;

    Ok(OptimizationResult {
        reagent: Ratio::new::<percent>(vol_pct),
        extraction,
        stripping,
        residual: MassConcentration::new::<gram_per_liter>(solution.residual),
    })
}

/// Circuit-consistency residual at one trial reagent concentration.
fn residual(inputs: &ProcessInputs, vol_pct: f64) -> Result<f64, CircuitError> {
    let extraction = extraction::simulate(inputs, vol_pct)?;
    let loaded = extraction.circuit.loaded_organic.get::<gram_per_liter>();
    let required = extraction.circuit.stripped_organic.get::<gram_per_liter>();

    let stripping = stripping::simulate(inputs, vol_pct, loaded, required)?;
    let produced = stripping.circuit.stripped_organic.get::<gram_per_liter>();

    Ok(required - produced)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use crate::models::hydromet::sx::core::{StageEfficiencies, test_support::baseline};

    fn solve_baseline() -> OptimizationResult {
        solve(&baseline(), &OptimizeConfig::default(), None).unwrap()
    }

    #[test]
    fn converges_near_the_empirical_guess() {
        let result = solve_baseline();
        let vol_pct = result.reagent.get::<percent>();

        assert_relative_eq!(vol_pct, 17.102_471, epsilon = 1e-3);
        assert!(
            result.residual.get::<gram_per_liter>().abs() < 1e-7,
            "consistency residual must meet the search tolerance"
        );
    }

    #[test]
    fn circuits_agree_at_the_optimum() {
        let result = solve_baseline();

        let required = result
            .extraction
            .circuit
            .stripped_organic
            .get::<gram_per_liter>();
        let produced = result
            .stripping
            .circuit
            .stripped_organic
            .get::<gram_per_liter>();
        assert!((required - produced).abs() < 1e-6);

        let loaded = result
            .extraction
            .circuit
            .loaded_organic
            .get::<gram_per_liter>();
        assert!(loaded > produced, "net transfer requires LO > SO");
    }

    #[test]
    fn matches_reference_optimum() {
        let result = solve_baseline();

        assert_relative_eq!(
            result
                .extraction
                .circuit
                .loaded_organic
                .get::<gram_per_liter>(),
            6.775_142,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            result
                .stripping
                .circuit
                .stripped_organic
                .get::<gram_per_liter>(),
            1.830_433,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            result
                .extraction
                .circuit
                .aqueous_outlet
                .get::<gram_per_liter>(),
            0.819_114,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            result.extraction.circuit.recovery.get::<percent>(),
            88.298_373,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            result.stripping.oa_ratio.get::<ratio>(),
            3.033_546,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            result.stripping.net_transfer.get::<gram_per_liter>(),
            0.289_122,
            epsilon = 1e-4
        );
    }

    #[test]
    fn electrolyte_loop_closes_at_the_optimum() {
        let result = solve_baseline();

        // At a consistent operating point the stripping circuit's aqueous
        // inlet reproduces the spent electrolyte.
        let x_back = result.stripping.circuit.stages[1]
            .inlet
            .aqueous
            .get::<gram_per_liter>();
        assert_relative_eq!(x_back, 35.0, epsilon = 1e-4);
    }

    #[test]
    fn recovery_does_not_drop_when_efficiency_rises() {
        let mut degraded = baseline();
        degraded.extraction_efficiency = StageEfficiencies::new_unchecked(
            Ratio::new::<percent>(80.0),
            Ratio::new::<percent>(80.0),
        );

        let low = solve(&degraded, &OptimizeConfig::default(), None).unwrap();
        let high = solve_baseline();

        let low_recovery = low.extraction.circuit.recovery.get::<percent>();
        let high_recovery = high.extraction.circuit.recovery.get::<percent>();
        assert!(
            high_recovery >= low_recovery,
            "raising stage efficiency must not lose recovery \
             ({low_recovery} -> {high_recovery})"
        );
        assert_relative_eq!(low_recovery, 77.998_861, epsilon = 1e-2);
    }

    #[test]
    fn rich_feed_converges_out_of_range() {
        let mut inputs = baseline();
        inputs.pls.copper = MassConcentration::new::<gram_per_liter>(40.0);

        let result = solve(&inputs, &OptimizeConfig::default(), None);
        match result {
            Err(OptimizeError::OutOfRange { found, .. }) => {
                assert_relative_eq!(found.get::<percent>(), 50.863, epsilon = 0.1);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn zero_feed_is_reported_as_inconsistent() {
        let mut inputs = baseline();
        inputs.pls.copper = MassConcentration::new::<gram_per_liter>(0.0);

        // Every trial fails with LO <= SO, so the objective is a flat
        // sentinel and the search dies on a non-finite update instead of
        // converging.
        let result = solve(&inputs, &OptimizeConfig::default(), None);
        assert!(matches!(result, Err(OptimizeError::Search(_))));

        // The underlying circuit failure is the stripping inconsistency.
        let extraction = extraction::simulate(&inputs, 17.1).unwrap();
        let loaded = extraction.circuit.loaded_organic.get::<gram_per_liter>();
        let required = extraction
            .circuit
            .stripped_organic
            .get::<gram_per_liter>();
        assert!(matches!(
            stripping::simulate(&inputs, 17.1, loaded, required),
            Err(CircuitError::Inconsistent { .. })
        ));
    }

    #[test]
    fn cancellation_wins_over_search_errors() {
        let flag = CancelFlag::new();
        flag.cancel();

        let result = solve(&baseline(), &OptimizeConfig::default(), Some(&flag));
        assert!(matches!(result, Err(OptimizeError::Cancelled)));
    }
}
