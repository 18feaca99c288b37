//! Core two-circuit solvent-extraction computation.
//!
//! Everything in here works on raw g/L and vol% magnitudes; typed
//! quantities appear only in the input and result types at the module
//! boundary. The pieces compose bottom-up:
//!
//! - [`isotherm`]: the per-circuit equilibrium curves,
//! - [`stage`]: one mixer-settler stage,
//! - [`extraction`] / [`stripping`]: the two circuit simulators,
//! - [`optimize`]: the outer consistency search tying them together.

mod error;
mod extraction;
mod input;
mod isotherm;
mod optimize;
mod results;
mod stage;
mod stripping;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{CircuitError, OptimizeError};
pub use input::{Electrolyte, PlsFeed, ProcessInputs, StageEfficiencies};
pub use optimize::OptimizeConfig;
pub use results::{
    CircuitResult, CurveData, EquilibriumPoint, ExtractionResult, OptimizationResult, StageRecord,
    StrippingResult,
};

pub(super) use optimize::solve;
