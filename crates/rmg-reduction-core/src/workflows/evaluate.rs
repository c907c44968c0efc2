use crate::core::io::mechanism::Mechanism;
use crate::engine::config::Conditions;
use crate::engine::error::EngineError;
use crate::engine::rates::{Direction, production_rate, reaction_rate};
use crate::engine::reduction_reaction::wrap_mechanism;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionReport {
    pub equation: String,
    pub forward_coefficient: f64,
    pub backward_coefficient: f64,
    pub forward_rate: f64,
    pub reverse_rate: f64,
}

impl ReactionReport {
    pub fn net_rate(&self) -> f64 {
        self.forward_rate - self.reverse_rate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesReport {
    pub label: String,
    pub production_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationReport {
    pub reactions: Vec<ReactionReport>,
    pub species: Vec<SpeciesReport>,
}

/// Evaluates rate coefficients, mass-action rates, and species production
/// rates for every reaction of `mechanism` under `conditions`.
#[instrument(skip_all, name = "evaluate_mechanism_workflow", fields(temperature = conditions.temperature, pressure = conditions.pressure))]
pub fn evaluate_mechanism(
    mechanism: &Mechanism,
    conditions: &Conditions,
) -> Result<EvaluationReport, EngineError> {
    info!(
        num_reactions = mechanism.reactions.len(),
        "Starting mechanism evaluation."
    );

    let mut reactions = wrap_mechanism(mechanism);
    let mut reaction_reports = Vec::with_capacity(reactions.len());
    for reaction in reactions.iter_mut() {
        let forward_coefficient =
            reaction.forward_rate(conditions.temperature, conditions.pressure)?;
        let backward_coefficient =
            reaction.backward_rate(conditions.temperature, conditions.pressure)?;
        let forward_rate = reaction_rate(reaction, Direction::Forward, conditions)?;
        let reverse_rate = reaction_rate(reaction, Direction::Reverse, conditions)?;
        reaction_reports.push(ReactionReport {
            equation: reaction.to_string(),
            forward_coefficient,
            backward_coefficient,
            forward_rate,
            reverse_rate,
        });
    }

    let mut species_reports = Vec::new();
    for label in mechanism.species_labels() {
        let rate = production_rate(&label, &mut reactions, conditions)?;
        species_reports.push(SpeciesReport {
            label,
            production_rate: rate,
        });
    }

    info!(
        num_species = species_reports.len(),
        "Mechanism evaluation complete."
    );

    Ok(EvaluationReport {
        reactions: reaction_reports,
        species: species_reports,
    })
}
