//! # RMG Reduction Core Library
//!
//! Rate-coefficient caching and stoichiometry bookkeeping for kinetic
//! mechanism reduction.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Species and reaction models, Arrhenius
//!   kinetics, reaction thermochemistry, and mechanism/concentration file I/O.
//!
//! - **[`engine`]: The Logic Core.** [`engine::reduction_reaction::ReductionReaction`]
//!   wraps any [`core::models::reaction::ReactionRecord`], computes its forward
//!   and backward rate coefficients once and keeps them, and counts how often
//!   each species label appears among reactants and products. Mass-action rates
//!   and reaction conditions live here too.
//!
//! - **[`workflows`]: The Public API.** [`workflows::evaluate::evaluate_mechanism`]
//!   runs the engine over a whole mechanism.

pub mod core;
pub mod engine;
pub mod workflows;
