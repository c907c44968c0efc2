use super::constants::GAS_CONSTANT;
use super::error::{KineticsError, check_temperature};
use serde::{Deserialize, Serialize};

/// Standard enthalpy (J/mol) and entropy (J/(mol·K)) of reaction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReactionThermo {
    pub delta_h: f64,
    pub delta_s: f64,
}

impl ReactionThermo {
    pub fn new(delta_h: f64, delta_s: f64) -> Self {
        Self { delta_h, delta_s }
    }

    #[inline]
    pub fn gibbs_energy(&self, temperature: f64) -> f64 {
        self.delta_h - temperature * self.delta_s
    }

    /// Dimensionless equilibrium constant `Ka = exp(-ΔG / RT)`.
    pub fn equilibrium_constant(&self, temperature: f64) -> Result<f64, KineticsError> {
        check_temperature(temperature)?;
        Ok((-self.gibbs_energy(temperature) / (GAS_CONSTANT * temperature)).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gibbs_energy_combines_enthalpy_and_entropy() {
        let thermo = ReactionThermo::new(-50_000.0, -100.0);
        assert_eq!(thermo.gibbs_energy(300.0), -20_000.0);
    }

    #[test]
    fn equilibrium_constant_is_unity_for_zero_gibbs_energy() {
        let thermo = ReactionThermo::default();
        assert_eq!(thermo.equilibrium_constant(1000.0).unwrap(), 1.0);
    }

    #[test]
    fn equilibrium_constant_favours_products_for_exergonic_reaction() {
        let thermo = ReactionThermo::new(-40_000.0, 0.0);
        let expected = (40_000.0 / (GAS_CONSTANT * 500.0)).exp();
        let keq = thermo.equilibrium_constant(500.0).unwrap();
        assert!((keq - expected).abs() / expected < 1e-12);
        assert!(keq > 1.0);
    }

    #[test]
    fn equilibrium_constant_rejects_non_positive_temperature() {
        let thermo = ReactionThermo::new(1.0, 1.0);
        assert_eq!(
            thermo.equilibrium_constant(0.0),
            Err(KineticsError::NonPositiveTemperature(0.0))
        );
    }
}
