use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use kassa_config::KassaConfig;
use kassa_telemetry::MetricsRecorder;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulation over an event log
    Simulate(SimulateArgs),
    /// Validate a configuration file without running anything
    CheckConfig(CheckConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Store configuration (YAML or JSON); defaults to config/kassa.yaml
    /// plus KASSA_* environment overrides.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Event log to seed the run with.
    #[arg(short, long)]
    pub events: PathBuf,

    /// Dump the Prometheus exposition after the run.
    #[arg(long, default_value_t = false)]
    pub metrics: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckConfigArgs {
    /// Configuration file to validate.
    #[arg(short, long)]
    pub config: PathBuf,
}

pub fn run_simulation(args: SimulateArgs) -> anyhow::Result<()> {
    let metrics = args.metrics.then(MetricsRecorder::new);

    let stats = kassa_engine::run_from_files(args.config, args.events, metrics.clone())?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    if let Some(metrics) = metrics {
        print!("{}", metrics.gather_metrics()?);
    }
    Ok(())
}

pub fn check_config(args: CheckConfigArgs) -> anyhow::Result<()> {
    let config = KassaConfig::load_from_path(&args.config)?;
    info!(?config, "configuration is valid");
    println!("{} is valid", args.config.display());
    Ok(())
}
