//! `fdeck` - CLI for flightdeck
//!
//! This binary provides the command-line interface for querying the flight
//! dataset, either interactively through the menu shell or via the
//! configuration subcommands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use flightdeck::cli::{Cli, Command, ConfigCommand};
use flightdeck::{init_logging, Config, FlightStore, Shell};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, then apply CLI overrides
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(database) = cli.database {
        config.store.database_path = database;
    }

    // Execute the command
    match cli.command {
        None | Some(Command::Shell) => run_shell(&config),
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
    }
}

fn run_shell(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = FlightStore::open(config.database_path())?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(
        &store,
        config.map_output_path(),
        stdin.lock(),
        stdout.lock(),
    );
    shell.run()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Database path: {}", config.database_path().display());
                println!();
                println!("[Map]");
                println!("  Output path:   {}", config.map_output_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
