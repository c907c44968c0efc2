use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KineticsError {
    #[error("Temperature must be positive, got {0} K")]
    NonPositiveTemperature(f64),

    #[error("Temperature {temperature} K is outside the valid range [{min}, {max}] K")]
    TemperatureOutOfRange { temperature: f64, min: f64, max: f64 },

    #[error("Pressure must be positive, got {0} Pa")]
    NonPositivePressure(f64),

    #[error("Reference temperature must be a positive, finite number of kelvin, got {0}")]
    InvalidReferenceTemperature(f64),

    #[error("Valid temperature range is empty: minimum {min} K exceeds maximum {max} K")]
    InvalidTemperatureRange { min: f64, max: f64 },
}

pub(crate) fn check_temperature(temperature: f64) -> Result<(), KineticsError> {
    if temperature > 0.0 {
        Ok(())
    } else {
        Err(KineticsError::NonPositiveTemperature(temperature))
    }
}

pub(crate) fn check_pressure(pressure: f64) -> Result<(), KineticsError> {
    if pressure > 0.0 {
        Ok(())
    } else {
        Err(KineticsError::NonPositivePressure(pressure))
    }
}
