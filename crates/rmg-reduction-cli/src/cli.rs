use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "RMG Team",
    version,
    about = "rmg-reduce - Inspect cached rate coefficients, stoichiometry, and mass-action rates of a kinetic mechanism.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print forward/backward rate coefficients and stoichiometry of every reaction.
    Inspect(InspectArgs),
    /// Evaluate mass-action reaction rates and species production rates.
    Rates(RatesArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the reaction mechanism in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mechanism: PathBuf,

    /// Temperature in K.
    #[arg(short = 'T', long, required = true, value_name = "KELVIN")]
    pub temperature: f64,

    /// Pressure in Pa.
    #[arg(short = 'P', long, default_value_t = 1.0e5, value_name = "PASCAL")]
    pub pressure: f64,
}

/// Arguments for the `rates` subcommand.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Path to the reaction mechanism in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mechanism: PathBuf,

    /// Reaction conditions file in TOML format (temperature, pressure, concentrations).
    #[arg(short, long, value_name = "PATH")]
    pub conditions: Option<PathBuf>,

    /// CSV table of species concentrations (`label,concentration`, mol/m³).
    /// Entries override those from the conditions file.
    #[arg(long, value_name = "PATH")]
    pub concentrations: Option<PathBuf>,

    /// Override the temperature (K) from the conditions file.
    #[arg(short = 'T', long, value_name = "KELVIN")]
    pub temperature: Option<f64>,

    /// Override the pressure (Pa) from the conditions file.
    #[arg(short = 'P', long, value_name = "PASCAL")]
    pub pressure: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn inspect_parses_temperature_and_defaults_pressure() {
        let cli = Cli::try_parse_from(["rmg-reduce", "inspect", "-m", "mech.toml", "-T", "800"])
            .unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.mechanism, PathBuf::from("mech.toml"));
                assert_eq!(args.temperature, 800.0);
                assert_eq!(args.pressure, 1.0e5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rates_accepts_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "rmg-reduce",
            "rates",
            "--mechanism",
            "mech.toml",
            "--conditions",
            "cond.toml",
            "-P",
            "2e5",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Rates(args) => {
                assert_eq!(args.conditions, Some(PathBuf::from("cond.toml")));
                assert_eq!(args.pressure, Some(2.0e5));
                assert_eq!(args.temperature, None);
                assert!(args.concentrations.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result =
            Cli::try_parse_from(["rmg-reduce", "-q", "-v", "inspect", "-m", "m.toml", "-T", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn inspect_requires_temperature() {
        let result = Cli::try_parse_from(["rmg-reduce", "inspect", "-m", "mech.toml"]);
        assert!(result.is_err());
    }
}
