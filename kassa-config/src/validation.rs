//! Custom validation functions for configuration.

use validator::ValidationError;

use crate::store::StoreConfig;

/// A store with zero lanes of every kind can never admit a customer.
pub fn validate_lane_mix(config: &StoreConfig) -> Result<(), ValidationError> {
    if config.regular_count + config.express_count + config.self_serve_count == 0 {
        let mut error = ValidationError::new("no_lanes");
        error.message = Some("at least one checkout lane must be configured".into());
        return Err(error);
    }
    Ok(())
}
