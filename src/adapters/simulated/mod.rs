//! Simulated network collaborators.
//!
//! Stand-ins for the real upload and profile backends: each call waits a
//! fixed latency, then resolves from a single random draw.

mod profile;
mod upload;

pub use profile::SimulatedProfileService;
pub use upload::SimulatedUploadService;

use std::time::Duration;

/// Latency and success rate shared by the simulated services.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationProfile {
    pub latency: Duration,
    pub success_probability: f64,
}

impl SimulationProfile {
    pub fn new(latency: Duration, success_probability: f64) -> Self {
        Self {
            latency,
            success_probability: success_probability.clamp(0.0, 1.0),
        }
    }
}
