use crate::core::kinetics::error::KineticsError;
use crate::core::models::role::Role;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Kinetics(#[from] KineticsError),

    #[error("Species '{label}' does not appear as a {role} of this reaction")]
    MissingSpecies { label: String, role: Role },

    #[error("Equilibrium constant of '{reaction}' is zero at {temperature} K")]
    ZeroEquilibriumConstant { reaction: String, temperature: f64 },

    #[error("No concentration given for species '{label}'")]
    MissingConcentration { label: String },
}
