//! # Kinetics Module
//!
//! Temperature-dependent rate and equilibrium expressions used by the
//! reaction records shipped with this crate.
//!
//! - [`arrhenius`] - Modified Arrhenius rate coefficients with an optional validity range
//! - [`thermo`] - Reaction enthalpy/entropy and the dimensionless equilibrium constant
//! - [`constants`] - Physical constants shared by both
//! - [`error`] - Failures raised while evaluating either expression

pub mod arrhenius;
pub mod constants;
pub mod error;
pub mod thermo;
