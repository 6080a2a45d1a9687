use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "summercal.toml";

/// summercal static event calendar generator.
#[derive(Parser)]
#[command(
    name = "summercal",
    version,
    about = "Render labeled date ranges from CSV as a static HTML calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the calendar document.
    Generate(GenerateArgs),
    /// Validate the event file and report labels, colors, and overlaps.
    Check(CheckArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file [default: summercal.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output HTML path from config (`-` for stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Year for bare month numbers given with --month.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month to render, as `7` (with --year) or `2025-07`. Repeatable.
    #[arg(short, long = "month", value_name = "MONTH")]
    pub months: Vec<String>,

    /// Override document title from config.
    #[arg(long)]
    pub title: Option<String>,

    /// Emit a label legend above the calendars.
    #[arg(long)]
    pub legend: bool,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file [default: summercal.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_with_months() {
        let cli = Cli::parse_from([
            "summercal", "-vv", "generate", "-y", "2025", "-m", "6", "-m", "2025-07", "--legend",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.year, Some(2025));
        assert_eq!(args.months, ["6", "2025-07"]);
        assert!(args.legend);
        assert_eq!(args.config, None);
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["summercal", "check", "-i", "events.csv"]);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.input, Some(PathBuf::from("events.csv")));
    }
}
