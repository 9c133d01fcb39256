//! Validation pipeline configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::ValidationPipelineConfig;

/// Debounce settings for live profile validation
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Quiet period after the last edit, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl ValidationConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn pipeline_config(&self) -> ValidationPipelineConfig {
        ValidationPipelineConfig::default().with_debounce(self.debounce())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms == 0 {
            return Err(ValidationError::ZeroDebounce);
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}
