use crate::error::{CliError, Result};
use rmg_reduction::engine::config::{Conditions, ConditionsBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Reaction conditions as written in a TOML file. Every key is optional so
/// that command-line overrides can fill the gaps.
///
/// ```toml
/// temperature = 1000.0
/// pressure = 1.0e5
///
/// [concentrations]
/// CH4 = 12.0
/// O2 = 24.0
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConditions {
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(default)]
    pub concentrations: HashMap<String, f64>,
}

impl FileConditions {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let conditions: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::Error::new(e),
        })?;
        debug!(
            path = %path.display(),
            num_concentrations = conditions.concentrations.len(),
            "Loaded conditions file."
        );
        Ok(conditions)
    }
}

/// Command-line values that take precedence over the conditions file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConditionOverrides {
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub concentrations: HashMap<String, f64>,
}

/// Merges file values with overrides (overrides win) and validates the result.
pub fn build_conditions(
    file: FileConditions,
    overrides: ConditionOverrides,
) -> Result<Conditions> {
    let mut builder = ConditionsBuilder::new().concentrations(file.concentrations);

    if let Some(t) = overrides.temperature.or(file.temperature) {
        builder = builder.temperature(t);
    }
    if let Some(p) = overrides.pressure.or(file.pressure) {
        builder = builder.pressure(p);
    }
    builder = builder.concentrations(overrides.concentrations);

    Ok(builder.build()?)
}
