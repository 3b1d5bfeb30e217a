//! Command-line interface for flightdeck.
//!
//! This module provides the CLI structure for the `fdeck` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::ConfigCommand;

/// fdeck - Look up flights and delays in a local flight dataset
///
/// Without a subcommand, starts the interactive menu shell against the
/// configured SQLite dataset.
#[derive(Debug, Parser)]
#[command(name = "fdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the SQLite flight dataset (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive menu shell (the default)
    Shell,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "fdeck");
    }

    #[test]
    fn test_parse_no_subcommand_defaults_to_shell() {
        let cli = Cli::try_parse_from(["fdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_shell() {
        let cli = Cli::try_parse_from(["fdeck", "shell"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Shell)));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["fdeck", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: false }))
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let cli = Cli::try_parse_from(["fdeck", "-c", "/custom/config.toml", "shell"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_database_override() {
        let cli = Cli::try_parse_from(["fdeck", "-d", "/data/flights.sqlite3"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("/data/flights.sqlite3")));
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["fdeck", "-q"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["fdeck"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["fdeck", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["fdeck", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }
}
