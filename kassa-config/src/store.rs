//! Store layout configuration.

use kassa_core::StoreLayout;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

/// Lane counts and the shared per-lane capacity.
///
/// Field names match the JSON/YAML config files consumed by the CLI.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = validation::validate_lane_mix))]
pub struct StoreConfig {
    /// Number of regular checkout lanes.
    #[serde(default = "default_regular_count")]
    #[validate(range(max = 1024))]
    pub regular_count: usize,

    /// Number of express lanes (7-item limit).
    #[serde(default = "default_express_count")]
    #[validate(range(max = 1024))]
    pub express_count: usize,

    /// Number of self-serve lanes (double service time).
    #[serde(default = "default_self_serve_count")]
    #[validate(range(max = 1024))]
    pub self_serve_count: usize,

    /// Maximum customers queued per lane, uniform across all lanes.
    #[serde(default = "default_line_capacity")]
    #[validate(range(min = 1, max = 65536))]
    pub line_capacity: usize,
}

fn default_regular_count() -> usize {
    1
}

fn default_express_count() -> usize {
    1
}

fn default_self_serve_count() -> usize {
    1
}

fn default_line_capacity() -> usize {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            regular_count: default_regular_count(),
            express_count: default_express_count(),
            self_serve_count: default_self_serve_count(),
            line_capacity: default_line_capacity(),
        }
    }
}

impl StoreConfig {
    /// The layout record the core store is built from.
    pub fn layout(&self) -> StoreLayout {
        StoreLayout {
            regular_count: self.regular_count,
            express_count: self.express_count,
            self_serve_count: self.self_serve_count,
            line_capacity: self.line_capacity,
        }
    }
}
