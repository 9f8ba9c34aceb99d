//! CLI argument definitions for cron-parse.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.

use clap::{Parser, Subcommand};

/// Expand a cron expression into the concrete values each field fires at.
#[derive(Debug, Parser)]
#[command(name = "cron-parse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tracing filter for diagnostics written to stderr (e.g. "debug").
    #[arg(
        long,
        global = true,
        value_name = "FILTER",
        env = "CRON_PARSE_LOG",
        default_value = "warn"
    )]
    pub log_level: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a cron expression and print the times at which it runs.
    #[command(long_about = PARSE_LONG_ABOUT, after_help = PARSE_EXAMPLES)]
    Parse(ParseArgs),
}

const PARSE_LONG_ABOUT: &str = "\
Parse a standard cron expression and print the expanded schedule for each
of the five fields, followed by the command.

Cron expressions consist of 5 fields followed by a command:
  * Minute (0-59)
  * Hour (0-23)
  * Day of month (1-31)
  * Month (1-12)
  * Day of week (0-6 where 0 is Sunday)";

const PARSE_EXAMPLES: &str = "\
Examples:
  cron-parse parse \"*/15 0 1,15 * 1-5 /usr/bin/find\"
  cron-parse parse \"0 12 * * 0 echo 'Run at noon on Sundays'\"";

/// Arguments for the `parse` subcommand.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// Five cron fields followed by the command, as a single quoted string.
    #[arg(value_name = "CRON_STRING")]
    pub expression: String,

    /// Output JSON instead of the labeled table (machine-readable).
    #[arg(long)]
    pub json: bool,

    /// Reject list values and ranges outside each field's allowed range.
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand_args() {
        let cli = Cli::try_parse_from(["cron-parse", "parse", "* * * * * ls", "--json"]).unwrap();
        let Commands::Parse(args) = cli.command;
        assert_eq!(args.expression, "* * * * * ls");
        assert!(args.json);
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_requires_expression() {
        assert!(Cli::try_parse_from(["cron-parse", "parse"]).is_err());
    }

    #[test]
    fn test_parse_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["cron-parse", "parse", "* * * * * ls", "extra"]).is_err());
    }

    #[test]
    fn test_log_level_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cron-parse",
            "parse",
            "* * * * * ls",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
    }
}
