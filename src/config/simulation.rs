//! Simulated backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::SimulationProfile;

/// Latency and success rate of the simulated upload backend
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_upload_latency_ms")]
    pub latency_ms: u64,

    #[serde(default = "default_success_probability")]
    pub success_probability: f64,
}

/// Latency and success rate of the simulated profile backend
#[derive(Debug, Clone, Deserialize)]
pub struct SaveConfig {
    #[serde(default = "default_save_latency_ms")]
    pub latency_ms: u64,

    #[serde(default = "default_success_probability")]
    pub success_probability: f64,
}

impl UploadConfig {
    pub fn simulation(&self) -> SimulationProfile {
        SimulationProfile::new(Duration::from_millis(self.latency_ms), self.success_probability)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_probability(self.success_probability, "uploads")
    }
}

impl SaveConfig {
    pub fn simulation(&self) -> SimulationProfile {
        SimulationProfile::new(Duration::from_millis(self.latency_ms), self.success_probability)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_probability(self.success_probability, "saves")
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_upload_latency_ms(),
            success_probability: default_success_probability(),
        }
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_save_latency_ms(),
            success_probability: default_success_probability(),
        }
    }
}

fn check_probability(p: f64, what: &'static str) -> Result<(), ValidationError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ValidationError::InvalidProbability(what));
    }
    Ok(())
}

fn default_upload_latency_ms() -> u64 {
    2000
}

fn default_save_latency_ms() -> u64 {
    1000
}

fn default_success_probability() -> f64 {
    0.9
}
