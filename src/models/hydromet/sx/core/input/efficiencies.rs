use uom::si::f64::Ratio;

use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalLowerOpen};

/// Murphree efficiencies for a two-stage circuit.
///
/// Each efficiency expresses a stage's fractional approach to equilibrium
/// and is guaranteed to lie in `(0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct StageEfficiencies {
    stage1: Ratio,
    stage2: Ratio,
}

impl StageEfficiencies {
    /// Constructs validated stage efficiencies.
    ///
    /// # Errors
    ///
    /// Returns an error if either efficiency lies outside `(0, 1]`.
    pub fn new(stage1: Ratio, stage2: Ratio) -> ConstraintResult<Self> {
        let stage1 = Constrained::<Ratio, UnitIntervalLowerOpen>::new(stage1)?;
        let stage2 = Constrained::<Ratio, UnitIntervalLowerOpen>::new(stage2)?;
        Ok(Self::from_constrained(stage1, stage2))
    }

    /// Constructs stage efficiencies from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        stage1: Constrained<Ratio, UnitIntervalLowerOpen>,
        stage2: Constrained<Ratio, UnitIntervalLowerOpen>,
    ) -> Self {
        Self {
            stage1: stage1.into_inner(),
            stage2: stage2.into_inner(),
        }
    }

    /// Constructs stage efficiencies without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both efficiencies lie in `(0, 1]`. Violating
    /// this invariant will result in unexpected errors or non-physical
    /// results.
    #[must_use]
    pub fn new_unchecked(stage1: Ratio, stage2: Ratio) -> Self {
        Self { stage1, stage2 }
    }

    /// Returns the first (loaded-end) stage efficiency.
    #[must_use]
    pub fn stage1(&self) -> Ratio {
        self.stage1
    }

    /// Returns the second (barren-end) stage efficiency.
    #[must_use]
    pub fn stage2(&self) -> Ratio {
        self.stage2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn accepts_efficiencies_up_to_full_equilibrium() {
        let eff = StageEfficiencies::new(
            Ratio::new::<percent>(95.0),
            Ratio::new::<percent>(100.0),
        )
        .unwrap();
        assert_eq!(eff.stage1().get::<percent>(), 95.0);
        assert_eq!(eff.stage2().get::<percent>(), 100.0);
    }

    #[test]
    fn rejects_out_of_band_efficiencies() {
        assert!(
            StageEfficiencies::new(Ratio::new::<percent>(0.0), Ratio::new::<percent>(95.0))
                .is_err()
        );
        assert!(
            StageEfficiencies::new(Ratio::new::<percent>(95.0), Ratio::new::<percent>(110.0))
                .is_err()
        );
    }
}
