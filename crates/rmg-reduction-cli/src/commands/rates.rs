use crate::cli::RatesArgs;
use crate::config::{ConditionOverrides, FileConditions, build_conditions};
use crate::error::Result;
use rmg_reduction::core::io::concentrations::load_concentrations;
use rmg_reduction::core::io::mechanism::Mechanism;
use rmg_reduction::workflows::evaluate::{EvaluationReport, evaluate_mechanism};
use std::io::Write;
use tracing::info;

pub fn run(args: RatesArgs) -> Result<()> {
    let file = match &args.conditions {
        Some(path) => FileConditions::load(path)?,
        None => FileConditions::default(),
    };

    let concentrations = match &args.concentrations {
        Some(path) => load_concentrations(path)?,
        None => Default::default(),
    };

    let conditions = build_conditions(
        file,
        ConditionOverrides {
            temperature: args.temperature,
            pressure: args.pressure,
            concentrations,
        },
    )?;

    info!(path = %args.mechanism.display(), "Loading mechanism.");
    let mechanism = Mechanism::load(&args.mechanism)?;
    let report = evaluate_mechanism(&mechanism, &conditions)?;

    let stdout = std::io::stdout();
    write_report(&report, &mut stdout.lock())?;
    Ok(())
}

pub fn write_report<W: Write>(report: &EvaluationReport, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<4} {:>14} {:>14} {:>14} {:>14} {:>14}  reaction",
        "#", "kf", "kb", "r_forward", "r_reverse", "r_net"
    )?;
    for (index, r) in report.reactions.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}  {}",
            index + 1,
            r.forward_coefficient,
            r.backward_coefficient,
            r.forward_rate,
            r.reverse_rate,
            r.net_rate(),
            r.equation
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{:<16} {:>14}", "species", "net production")?;
    for s in &report.species {
        writeln!(out, "{:<16} {:>14.6e}", s.label, s.production_rate)?;
    }
    Ok(())
}
