//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.datasets.inputs.is_empty() {
            return Err(ConfigError::ValidationError(
                "datasets.inputs must not be empty".into(),
            ));
        }
        if self.output.size == 0 {
            return Err(ConfigError::ValidationError(
                "output.size must be > 0".into(),
            ));
        }
        if self.output.quality == 0 || self.output.quality > 100 {
            return Err(ConfigError::ValidationError(
                "output.quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}
