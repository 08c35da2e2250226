//! # Kassa Configuration System
//!
//! Hierarchical configuration for the checkout-lane simulator.
//!
//! ## Features
//! - **Single source of truth**: one container struct across all components
//! - **Validation**: runtime validation of lane counts and capacities
//! - **Layering**: defaults, then config files, then `KASSA_*` environment
//!   variables
//! - **JSON and YAML**: store layouts are accepted in either format

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod store;
mod validation;

pub use error::ConfigError;
pub use store::StoreConfig;

/// Top-level configuration container for all kassa components.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct KassaConfig {
    /// Store layout (lane counts and capacity).
    #[validate(nested)]
    pub store: StoreConfig,
}

impl KassaConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/kassa.yaml` - base settings. If missing, defaults are used.
    /// 3. `KASSA_*` environment variables, nested fields split on `__`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(KassaConfig::default()));

        if Path::new("config/kassa.yaml").exists() {
            figment = figment.merge(Yaml::file("config/kassa.yaml"));
        }

        figment
            .merge(Env::prefixed("KASSA_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific YAML or JSON file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Figment::new().merge(Json::file(path)),
            Some("yaml") | Some("yml") => Figment::new().merge(Yaml::file(path)),
            _ => return Err(ConfigError::UnsupportedFormat(PathBuf::from(path))),
        };

        figment
            .merge(Env::prefixed("KASSA_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
