use thiserror::Error;

use kassa_config::ConfigError;
use kassa_core::SimulationError;

use crate::scenario::ScenarioError;

/// Engine-level error: everything that can stop a run before or while the
/// event loop drains.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Simulation invariant breach: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
