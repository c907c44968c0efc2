use crate::core::models::role::Role;
use crate::core::models::species::Labeled;
use std::collections::HashMap;

/// How many times each species label occurs among a reaction's reactants and products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stoichiometry {
    reactants: HashMap<String, usize>,
    products: HashMap<String, usize>,
}

fn count_labels<S: Labeled>(species: &[S]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for s in species {
        *counts.entry(s.label().to_string()).or_insert(0) += 1;
    }
    counts
}

impl Stoichiometry {
    pub fn from_species<S: Labeled>(reactants: &[S], products: &[S]) -> Self {
        Self {
            reactants: count_labels(reactants),
            products: count_labels(products),
        }
    }

    pub fn counts(&self, role: Role) -> &HashMap<String, usize> {
        match role {
            Role::Reactant => &self.reactants,
            Role::Product => &self.products,
        }
    }

    pub fn coefficient(&self, label: &str, role: Role) -> Option<usize> {
        self.counts(role).get(label).copied()
    }

    /// Net coefficient of `label`, products minus reactants; zero when it takes no part.
    pub fn net_coefficient(&self, label: &str) -> i64 {
        let produced = self.coefficient(label, Role::Product).unwrap_or(0) as i64;
        let consumed = self.coefficient(label, Role::Reactant).unwrap_or(0) as i64;
        produced - consumed
    }
}
