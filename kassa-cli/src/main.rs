//! ## kassa-cli
//! **Operational interface for the checkout-lane simulator**
//!
//! Loads a store configuration, parses an event log, runs the simulation
//! to completion, and prints the aggregate statistics as JSON.

use clap::Parser;

use kassa_telemetry::logging::EventLogger;

mod commands;

use commands::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    EventLogger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => commands::run_simulation(args),
        Commands::CheckConfig(args) => commands::check_config(args),
    }
}
