//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Debounce window must be greater than zero")]
    ZeroDebounce,

    #[error("Success probability for {0} must be between 0 and 1")]
    InvalidProbability(&'static str),

    #[error("Minimum earn amount must be greater than zero")]
    ZeroMinEarn,

    #[error("Minimum earn amount exceeds maximum")]
    InvalidEarnRange,

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
