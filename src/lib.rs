//! # SX Models
//!
//! Semi-empirical models of countercurrent copper solvent extraction:
//! an extraction circuit loading copper from pregnant leach solution onto an
//! organic reagent phase, and a stripping circuit transferring that copper
//! into the electrowinning electrolyte loop.
//!
//! The flagship model, [`models::hydromet::sx`], searches for the reagent
//! concentration (volume percent of active extractant) that makes the two
//! circuits mutually consistent, then reports the McCabe–Thiele state of
//! every mixer-settler stage.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts inside a model's internal `core` module and is promoted
//! to [`support`] once it proves useful beyond a single model. The root
//! finder, cubic solver, constraint types, and background-task runner all
//! followed that path.

pub mod models;
pub mod support;
