//! # Workflows Module
//!
//! High-level entry points that combine a mechanism file, reaction conditions,
//! and the engine's cached rate evaluation into a single report.

pub mod evaluate;
