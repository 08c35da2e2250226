//! # kassa-engine
//!
//! The simulation driver. Composes the event queue, the event state
//! machine, and the store/lane model from `kassa-core`, seeds the queue
//! from a parsed scenario, and drains it while tracking per-customer wait
//! statistics.

use std::path::Path;

use tracing::info;

use kassa_config::KassaConfig;
use kassa_core::store::Store;
use kassa_telemetry::MetricsRecorder;

pub mod error;
pub mod scenario;
pub mod simulation;

pub use error::EngineError;
pub use simulation::{SimStats, Simulation};

/// Loads a config (default search when `config_path` is `None`), parses the
/// event log, and runs the simulation to completion.
pub fn run_from_files<P: AsRef<Path>>(
    config_path: Option<P>,
    events_path: P,
    metrics: Option<MetricsRecorder>,
) -> Result<SimStats, EngineError> {
    let config = match config_path {
        Some(path) => KassaConfig::load_from_path(path)?,
        None => KassaConfig::load()?,
    };
    info!(?config, "configuration loaded");

    let store = Store::new(config.store.layout());
    let events = scenario::load_events(events_path, &store)?;
    info!(seed_events = events.len(), "scenario parsed");

    let mut simulation = Simulation::new(store);
    if let Some(metrics) = metrics {
        simulation = simulation.with_metrics(metrics);
    }
    Ok(simulation.run(events)?)
}
