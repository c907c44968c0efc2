use crate::cli::InspectArgs;
use crate::error::Result;
use rmg_reduction::core::io::mechanism::Mechanism;
use rmg_reduction::core::models::reaction::ReactionRecord;
use rmg_reduction::core::models::role::Role;
use rmg_reduction::core::models::species::Labeled;
use rmg_reduction::engine::config::ConditionsBuilder;
use rmg_reduction::engine::reduction_reaction::{ReductionReaction, wrap_mechanism};
use std::collections::HashSet;
use std::io::Write;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let conditions = ConditionsBuilder::new()
        .temperature(args.temperature)
        .pressure(args.pressure)
        .build()?;

    info!(path = %args.mechanism.display(), "Loading mechanism.");
    let mechanism = Mechanism::load(&args.mechanism)?;

    let stdout = std::io::stdout();
    write_inspection(
        &mechanism,
        conditions.temperature,
        conditions.pressure,
        &mut stdout.lock(),
    )
}

fn format_side<R: ReactionRecord>(reaction: &ReductionReaction<'_, R>, role: Role) -> Result<String> {
    let species = match role {
        Role::Reactant => reaction.reactants(),
        Role::Product => reaction.products(),
    };
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for s in species {
        if !seen.insert(s.label()) {
            continue;
        }
        let count = reaction.stoichiometric_coefficient(s, role)?;
        entries.push(format!("{} x{}", s.label(), count));
    }
    Ok(entries.join(", "))
}

pub fn write_inspection<W: Write>(
    mechanism: &Mechanism,
    temperature: f64,
    pressure: f64,
    out: &mut W,
) -> Result<()> {
    for (index, mut reaction) in wrap_mechanism(mechanism).into_iter().enumerate() {
        let kf = reaction.forward_rate(temperature, pressure)?;
        let kb = reaction.backward_rate(temperature, pressure)?;
        writeln!(out, "[{}] {}", index + 1, reaction)?;
        writeln!(out, "    kf = {:.6e}", kf)?;
        writeln!(out, "    kb = {:.6e}", kb)?;
        writeln!(out, "    reactants: {}", format_side(&reaction, Role::Reactant)?)?;
        writeln!(out, "    products:  {}", format_side(&reaction, Role::Product)?)?;
    }
    Ok(())
}
