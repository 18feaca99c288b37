//! Hydrometallurgical process models.
//!
//! This module contains models for aqueous metal-recovery flowsheets,
//! currently the copper solvent-extraction circuit optimizer in [`sx`].

pub mod sx;
