use super::config::Conditions;
use super::error::EngineError;
use super::reduction_reaction::ReductionReaction;
use crate::core::models::reaction::ReactionRecord;
use crate::core::models::role::Role;
use crate::core::models::species::Labeled;
use std::collections::HashSet;
use tracing::{instrument, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// The role whose species' concentrations drive the rate in this direction.
    pub fn driving_role(self) -> Role {
        match self {
            Direction::Forward => Role::Reactant,
            Direction::Reverse => Role::Product,
        }
    }
}

/// Mass-action rate `k · Π c_i^ν_i` of one direction of a reaction, in mol/(m³·s).
///
/// Uses the cached rate coefficients, so the first evaluation fixes `k` for
/// every later call on the same wrapper.
#[instrument(level = "trace", skip_all, fields(direction = ?direction))]
pub fn reaction_rate<R: ReactionRecord>(
    reaction: &mut ReductionReaction<'_, R>,
    direction: Direction,
    conditions: &Conditions,
) -> Result<f64, EngineError> {
    let k = match direction {
        Direction::Forward => reaction.forward_rate(conditions.temperature, conditions.pressure)?,
        Direction::Reverse => reaction.backward_rate(conditions.temperature, conditions.pressure)?,
    };

    let role = direction.driving_role();
    let species = match role {
        Role::Reactant => reaction.reactants(),
        Role::Product => reaction.products(),
    };

    let mut rate = k;
    let mut seen = HashSet::new();
    for s in species {
        if !seen.insert(s.label()) {
            continue;
        }
        let concentration =
            conditions
                .concentration(s.label())
                .ok_or_else(|| EngineError::MissingConcentration {
                    label: s.label().to_string(),
                })?;
        let order = reaction.stoichiometric_coefficient(s, role)?;
        rate *= concentration.powi(order as i32);
    }

    trace!(reaction = %reaction, rate, "Evaluated directional rate.");
    Ok(rate)
}

/// Forward minus reverse mass-action rate.
pub fn net_rate<R: ReactionRecord>(
    reaction: &mut ReductionReaction<'_, R>,
    conditions: &Conditions,
) -> Result<f64, EngineError> {
    let forward = reaction_rate(reaction, Direction::Forward, conditions)?;
    let reverse = reaction_rate(reaction, Direction::Reverse, conditions)?;
    Ok(forward - reverse)
}

/// Net production rate of `label` over `reactions`, `Σ (ν_product − ν_reactant) · r_net`.
///
/// Reactions in which the species takes no net part are not evaluated.
pub fn production_rate<R: ReactionRecord>(
    label: &str,
    reactions: &mut [ReductionReaction<'_, R>],
    conditions: &Conditions,
) -> Result<f64, EngineError> {
    let mut total = 0.0;
    for reaction in reactions.iter_mut() {
        let nu = reaction.stoichiometry().net_coefficient(label);
        if nu == 0 {
            continue;
        }
        total += nu as f64 * net_rate(reaction, conditions)?;
    }
    Ok(total)
}
