use super::constants::GAS_CONSTANT;
use super::error::{KineticsError, check_temperature};
use serde::{Deserialize, Serialize};

fn default_reference_temperature() -> f64 {
    1.0
}

/// Modified Arrhenius kinetics, `k(T) = A (T/T0)^n exp(-Ea / RT)`.
///
/// `ea` is in J/mol and `t0` in K. When `t_min`/`t_max` are given, evaluation
/// outside that window is rejected rather than extrapolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Arrhenius {
    pub a: f64,
    #[serde(default)]
    pub n: f64,
    #[serde(default)]
    pub ea: f64,
    #[serde(default = "default_reference_temperature")]
    pub t0: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_max: Option<f64>,
}

impl Arrhenius {
    pub fn new(a: f64, n: f64, ea: f64) -> Self {
        Self {
            a,
            n,
            ea,
            t0: default_reference_temperature(),
            t_min: None,
            t_max: None,
        }
    }

    pub fn with_range(mut self, t_min: f64, t_max: f64) -> Self {
        self.t_min = Some(t_min);
        self.t_max = Some(t_max);
        self
    }

    pub fn is_temperature_valid(&self, temperature: f64) -> bool {
        self.t_min.is_none_or(|min| temperature >= min)
            && self.t_max.is_none_or(|max| temperature <= max)
    }

    /// Checks the parameters themselves, independent of any temperature.
    pub fn validate(&self) -> Result<(), KineticsError> {
        if !(self.t0.is_finite() && self.t0 > 0.0) {
            return Err(KineticsError::InvalidReferenceTemperature(self.t0));
        }
        if let (Some(min), Some(max)) = (self.t_min, self.t_max) {
            if min > max {
                return Err(KineticsError::InvalidTemperatureRange { min, max });
            }
        }
        Ok(())
    }

    pub fn rate_coefficient(&self, temperature: f64) -> Result<f64, KineticsError> {
        self.validate()?;
        check_temperature(temperature)?;
        if !self.is_temperature_valid(temperature) {
            return Err(KineticsError::TemperatureOutOfRange {
                temperature,
                min: self.t_min.unwrap_or(0.0),
                max: self.t_max.unwrap_or(f64::INFINITY),
            });
        }

        Ok(self.a
            * (temperature / self.t0).powf(self.n)
            * (-self.ea / (GAS_CONSTANT * temperature)).exp())
    }
}
