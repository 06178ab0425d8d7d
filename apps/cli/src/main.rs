//! `mensura` - evaluate physical unit expressions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

mod commands;

/// Evaluate physical unit expressions.
///
/// Out of the box the seven SI base units (s, m, kg, A, K, mol, cd) are
/// known; further units can be defined with `add` and are kept in a registry
/// file between runs. Expressions have the form
/// `[<coefficient>*]<term1>*...*<termN>` where `<coefficient>` is a floating
/// point number and each term is `<unit>[^<exponent>]`. Evaluating an
/// expression substitutes all derived units by the SI base units they stand
/// for: with `km` and `h` defined, `36*km*h^-1` evaluates to
/// `10.000000*m*s^-1`.
#[derive(Parser, Debug)]
#[command(name = "mensura", version, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Expression to validate and evaluate, e.g. '36*km*h^-1'
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Registry file (defaults to .mensura in the home directory)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print all known unit definitions
    List,

    /// Define a new unit, e.g. `add km '1000*m'`
    Add {
        /// Name of the new unit
        unit: String,
        /// Defining expression over already-known units
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Remove a unit added earlier; base units and units referenced by other
    /// definitions cannot be removed
    Remove {
        /// Name of the unit to remove
        unit: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = registry_file(cli.file)?;

    match cli.command {
        Some(Command::List) => commands::list(&file),
        Some(Command::Add { unit, expression }) => commands::add(&file, &unit, &expression),
        Some(Command::Remove { unit }) => commands::remove(&file, &unit),
        None => match cli.expression {
            Some(expression) => commands::eval(&file, &expression),
            None => {
                Cli::command().print_help().context("failed to print help")?;
                Ok(())
            }
        },
    }
}

/// Resolve the registry file: `--file` wins, otherwise `~/.mensura`.
fn registry_file(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".mensura"))
}
