use super::species::{Labeled, Species};
use crate::core::kinetics::arrhenius::Arrhenius;
use crate::core::kinetics::constants::{GAS_CONSTANT, STANDARD_PRESSURE};
use crate::core::kinetics::error::{KineticsError, check_pressure};
use crate::core::kinetics::thermo::ReactionThermo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reaction whose kinetics and thermochemistry are computed elsewhere.
///
/// The reduction engine only ever reads the species lists and asks for the
/// two coefficients; how they are obtained is up to the implementor.
pub trait ReactionRecord: fmt::Display {
    type Species: Labeled;

    fn reactants(&self) -> &[Self::Species];

    fn products(&self) -> &[Self::Species];

    /// Forward rate coefficient at `temperature` (K) and `pressure` (Pa).
    fn rate_coefficient(&self, temperature: f64, pressure: f64) -> Result<f64, KineticsError>;

    /// Equilibrium constant at `temperature` (K).
    fn equilibrium_constant(&self, temperature: f64) -> Result<f64, KineticsError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ElementaryReaction {
    pub reactants: Vec<Species>,
    pub products: Vec<Species>,
    pub kinetics: Arrhenius,
    #[serde(default)]
    pub thermo: ReactionThermo,
}

impl ElementaryReaction {
    pub fn new(
        reactants: Vec<Species>,
        products: Vec<Species>,
        kinetics: Arrhenius,
        thermo: ReactionThermo,
    ) -> Self {
        Self {
            reactants,
            products,
            kinetics,
            thermo,
        }
    }

    /// Change in the number of gas-phase molecules, products minus reactants.
    pub fn molecularity_change(&self) -> i32 {
        self.products.len() as i32 - self.reactants.len() as i32
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &[Species]) -> fmt::Result {
    for (i, species) in side.iter().enumerate() {
        if i > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{}", species)?;
    }
    Ok(())
}

impl fmt::Display for ElementaryReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.reactants)?;
        f.write_str(" <=> ")?;
        write_side(f, &self.products)
    }
}

impl ReactionRecord for ElementaryReaction {
    type Species = Species;

    fn reactants(&self) -> &[Species] {
        &self.reactants
    }

    fn products(&self) -> &[Species] {
        &self.products
    }

    fn rate_coefficient(&self, temperature: f64, pressure: f64) -> Result<f64, KineticsError> {
        check_pressure(pressure)?;
        self.kinetics.rate_coefficient(temperature)
    }

    /// Concentration-based constant, `Kc = Ka (P° / RT)^Δn`, in (mol/m³)^Δn.
    fn equilibrium_constant(&self, temperature: f64) -> Result<f64, KineticsError> {
        let ka = self.thermo.equilibrium_constant(temperature)?;
        let standard_concentration = STANDARD_PRESSURE / (GAS_CONSTANT * temperature);
        Ok(ka * standard_concentration.powi(self.molecularity_change()))
    }
}
