use thiserror::Error;
use uom::si::f64::{MassConcentration, Ratio};

use crate::support::secant::SecantError;

/// Errors that can occur while simulating one circuit at a trial reagent
/// concentration.
#[derive(Debug, Error)]
pub enum CircuitError {
    /// The equilibrium cubic lost its leading coefficient.
    ///
    /// The isotherm always submits a monic cubic, so this cannot occur for
    /// valid constants and indicates a programming error rather than a
    /// modeling failure.
    #[error("equilibrium cubic is degenerate at {aqueous} g/L aqueous copper")]
    DegenerateIsotherm {
        /// Aqueous concentration the isotherm was evaluated at, in g/L.
        aqueous: f64,
    },

    /// A stage's aqueous-outlet search failed.
    #[error("stage {stage} aqueous outlet search failed")]
    StageSolve {
        /// One-based stage index within the circuit.
        stage: usize,

        /// Underlying root-finder failure.
        #[source]
        source: SecantError,
    },

    /// The loaded organic does not exceed the stripped organic fed back from
    /// the stripping circuit.
    ///
    /// Net copper transfer is the premise of the whole flowsheet; violating
    /// it is a modeling error, not a solver failure.
    #[error("loaded organic ({loaded:?}) does not exceed stripped organic ({stripped:?})")]
    Inconsistent {
        /// Loaded organic entering the stripping circuit.
        loaded: MassConcentration,

        /// Stripped organic the extraction circuit requires back.
        stripped: MassConcentration,
    },
}

/// Errors that can occur during the reagent-concentration optimization.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The outer secant search failed before converging.
    ///
    /// Trial evaluations that fail internally are absorbed into a large
    /// sentinel objective value, so this surfaces only when the search
    /// itself diverges or runs out of iterations.
    #[error("reagent concentration search failed")]
    Search(#[from] SecantError),

    /// The search converged to a reagent concentration outside the
    /// physically plausible band.
    #[error("converged reagent concentration {found:?} is outside (0, {max:?}]")]
    OutOfRange {
        /// The converged reagent concentration.
        found: Ratio,

        /// Upper end of the accepted band.
        max: Ratio,
    },

    /// Re-evaluating the circuits at the converged optimum failed.
    ///
    /// Unlike trial failures, an error at the chosen optimum is fatal and is
    /// reported to the caller unmodified.
    #[error("evaluation at the converged reagent concentration failed")]
    Evaluate(#[from] CircuitError),

    /// The solve was cancelled before completing.
    #[error("solve was cancelled")]
    Cancelled,
}
