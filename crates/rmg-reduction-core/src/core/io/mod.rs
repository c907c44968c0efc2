pub mod concentrations;
pub mod error;
pub mod mechanism;
