//! # Engine Module
//!
//! The stateful layer of the crate. A [`reduction_reaction::ReductionReaction`]
//! wraps a reaction record, remembers its forward and backward rate
//! coefficients after the first evaluation, and answers stoichiometric
//! coefficient queries by species label.
//!
//! - **Rate caching** ([`reduction_reaction`], [`memo`]) - One-shot forward/backward coefficients
//! - **Stoichiometry** ([`stoichiometry`]) - Per-role species counts frozen at construction
//! - **Rates** ([`rates`]) - Mass-action reaction and species production rates
//! - **Configuration** ([`config`]) - Reaction conditions and their builder
//! - **Error Handling** ([`error`]) - Failures surfaced by the engine
//!
//! None of these types synchronise internally. Rate slots are filled through
//! `&mut self`; callers sharing a wrapper between threads must put it behind a lock.

pub mod config;
pub mod error;
pub mod memo;
pub mod rates;
pub mod reduction_reaction;
pub mod stoichiometry;
