//! Command implementations for KMC CLI.
//!
//! Provides subcommands for working out a mix and for showing the
//! default recipe, with text, JSON or CSV output.

use clap::{Subcommand, ValueEnum};
use std::io::Write;

pub mod calculate;
pub mod defaults;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines, as shown on the mix form
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated rows with a header
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work out component weights and cost per pound for a batch
    Calculate(calculate::CalculateArgs),

    /// Show the default mix percentages and unit costs
    Defaults {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run a command, writing its output to `out`.
pub fn run_with_output(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Calculate(args) => calculate::run_calculate(&args, out),
        Command::Defaults { format } => defaults::run_defaults(format, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn run_args(args: &[&str]) -> (anyhow::Result<()>, String) {
        let cli = TestCli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run_with_output(cli.command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_calculate_from_command_line() {
        let (result, out) = run_args(&["kmc", "calculate", "--total-weight", "1000"]);
        assert!(result.is_ok());
        assert!(out.contains("Water Weight: 735.00 lbs"));
        assert!(out.contains("Total Cost per Pound: $2.88"));
    }

    #[test]
    fn test_component_flags_and_named_fields() {
        let (result, out) = run_args(&[
            "kmc",
            "calculate",
            "--boric-acid-weight",
            "35",
            "--field",
            "tru_core_cost=10",
            "--format",
            "csv",
        ]);
        assert!(result.is_ok());
        assert!(out.starts_with("item,weight_lbs,cost_per_lb\n"));
        assert!(out.contains("Total,1000.00,"));
    }

    #[test]
    fn test_defaults_from_command_line() {
        let (result, out) = run_args(&["kmc", "defaults", "--format", "csv"]);
        assert!(result.is_ok());
        assert!(out.contains("water,73.5,0.0"));
    }

    #[test]
    fn test_rejects_bad_field_syntax() {
        assert!(TestCli::try_parse_from(["kmc", "calculate", "--field", "water_weight"]).is_err());
        assert!(TestCli::try_parse_from(["kmc", "calculate", "--format", "xml"]).is_err());
    }
}
