//! # Core Module
//!
//! Stateless building blocks for kinetic mechanism reduction: the species and
//! reaction data models, the kinetics and thermochemistry used to evaluate
//! them, and readers for mechanism and concentration files.
//!
//! - **Data Models** ([`models`]) - Species labels, reaction roles, and the [`models::reaction::ReactionRecord`] seam
//! - **Kinetics** ([`kinetics`]) - Arrhenius rate coefficients and equilibrium constants
//! - **File I/O** ([`io`]) - TOML mechanisms and CSV concentration tables

pub mod io;
pub mod kinetics;
pub mod models;
