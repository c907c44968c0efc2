use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: String,
        reason: String,
    },
}

/// Reaction conditions: temperature (K), pressure (Pa), and species
/// concentrations (mol/m³) keyed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub temperature: f64,
    pub pressure: f64,
    pub concentrations: HashMap<String, f64>,
}

impl Conditions {
    pub fn concentration(&self, label: &str) -> Option<f64> {
        self.concentrations.get(label).copied()
    }
}

#[derive(Default)]
pub struct ConditionsBuilder {
    temperature: Option<f64>,
    pressure: Option<f64>,
    concentrations: HashMap<String, f64>,
}

impl ConditionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }
    pub fn concentration(mut self, label: impl Into<String>, value: f64) -> Self {
        self.concentrations.insert(label.into(), value);
        self
    }
    /// Adds every entry of `concentrations`, replacing values already set for the same label.
    pub fn concentrations(mut self, concentrations: HashMap<String, f64>) -> Self {
        self.concentrations.extend(concentrations);
        self
    }

    pub fn build(self) -> Result<Conditions, ConfigError> {
        let temperature = self
            .temperature
            .ok_or(ConfigError::MissingParameter("temperature"))?;
        let pressure = self
            .pressure
            .ok_or(ConfigError::MissingParameter("pressure"))?;

        if !(temperature.is_finite() && temperature > 0.0) {
            return Err(ConfigError::InvalidValue {
                parameter: "temperature".to_string(),
                reason: format!("must be a positive number of kelvin, got {}", temperature),
            });
        }
        if !(pressure.is_finite() && pressure > 0.0) {
            return Err(ConfigError::InvalidValue {
                parameter: "pressure".to_string(),
                reason: format!("must be a positive number of pascals, got {}", pressure),
            });
        }
        if let Some((label, value)) = self
            .concentrations
            .iter()
            .find(|(_, value)| !(value.is_finite() && **value >= 0.0))
        {
            return Err(ConfigError::InvalidValue {
                parameter: format!("concentrations.{}", label),
                reason: format!("must be a non-negative number, got {}", value),
            });
        }

        Ok(Conditions {
            temperature,
            pressure,
            concentrations: self.concentrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_succeeds_with_all_required_parameters() {
        let conditions = ConditionsBuilder::new()
            .temperature(500.0)
            .pressure(1.0e5)
            .concentration("A", 2.0)
            .build()
            .unwrap();
        assert_eq!(conditions.temperature, 500.0);
        assert_eq!(conditions.pressure, 1.0e5);
        assert_eq!(conditions.concentration("A"), Some(2.0));
        assert_eq!(conditions.concentration("B"), None);
    }

    #[test]
    fn build_fails_without_temperature() {
        let result = ConditionsBuilder::new().pressure(1.0e5).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("temperature")));
    }

    #[test]
    fn build_fails_without_pressure() {
        let result = ConditionsBuilder::new().temperature(300.0).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("pressure")));
    }

    #[test]
    fn build_rejects_non_positive_temperature_and_pressure() {
        let result = ConditionsBuilder::new().temperature(0.0).pressure(1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { parameter, .. }) if parameter == "temperature"
        ));

        let result = ConditionsBuilder::new()
            .temperature(300.0)
            .pressure(f64::NAN)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { parameter, .. }) if parameter == "pressure"
        ));
    }

    #[test]
    fn build_rejects_negative_concentration() {
        let result = ConditionsBuilder::new()
            .temperature(300.0)
            .pressure(1.0e5)
            .concentration("OH", -1.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { parameter, .. }) if parameter == "concentrations.OH"
        ));
    }

    #[test]
    fn later_concentrations_override_earlier_ones() {
        let mut table = HashMap::new();
        table.insert("A".to_string(), 5.0);
        let conditions = ConditionsBuilder::new()
            .temperature(300.0)
            .pressure(1.0e5)
            .concentration("A", 1.0)
            .concentration("B", 1.0)
            .concentrations(table)
            .build()
            .unwrap();
        assert_eq!(conditions.concentration("A"), Some(5.0));
        assert_eq!(conditions.concentration("B"), Some(1.0));
    }
}
