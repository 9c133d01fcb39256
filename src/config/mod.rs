//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `JOBBOARD` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use jobboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Debounce window: {:?}", config.validation.debounce());
//! ```

mod error;
mod logging;
mod rewards;
mod simulation;
mod validation;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use rewards::RewardsConfig;
pub use simulation::{SaveConfig, UploadConfig};
pub use validation::ValidationConfig;

use serde::Deserialize;

use crate::application::SessionSettings;
use crate::domain::rewards::TierTable;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Live validation debounce
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Simulated upload backend
    #[serde(default)]
    pub upload: UploadConfig,

    /// Simulated profile backend
    #[serde(default)]
    pub save: SaveConfig,

    /// Points award bounds
    #[serde(default)]
    pub rewards: RewardsConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `JOBBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `JOBBOARD__VALIDATION__DEBOUNCE_MS=750` -> `validation.debounce_ms = 750`
    /// - `JOBBOARD__UPLOAD__SUCCESS_PROBABILITY=0.5` -> `upload.success_probability = 0.5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("JOBBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for zero debounce windows, probabilities
    /// outside [0, 1], or an empty earn range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validation.validate()?;
        self.upload.validate()?;
        self.save.validate()?;
        self.rewards.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Session settings derived from this configuration.
    pub fn session_settings(&self) -> Result<SessionSettings, ValidationError> {
        Ok(SessionSettings {
            validation: self.validation.pipeline_config(),
            earn_range: self.rewards.earn_range()?,
            tiers: TierTable::standard(),
            seed_points: self.rewards.seed_points,
        })
    }
}
