//! Simulated profile persistence.

use async_trait::async_trait;
use std::sync::Arc;

use super::SimulationProfile;
use crate::domain::profile::Profile;
use crate::ports::{ProfileService, RandomSource, SaveError};

/// Profile service that fakes a save round-trip.
pub struct SimulatedProfileService {
    random: Arc<dyn RandomSource>,
    simulation: SimulationProfile,
}

impl SimulatedProfileService {
    pub fn new(random: Arc<dyn RandomSource>, simulation: SimulationProfile) -> Self {
        Self { random, simulation }
    }
}

#[async_trait]
impl ProfileService for SimulatedProfileService {
    async fn save(&self, profile: &Profile) -> Result<(), SaveError> {
        let succeeds = self.random.chance(self.simulation.success_probability);
        tokio::time::sleep(self.simulation.latency).await;

        if succeeds {
            tracing::debug!(name = %profile.name, "simulated save succeeded");
            Ok(())
        } else {
            tracing::debug!(name = %profile.name, "simulated save failed");
            Err(SaveError::Network("simulated save failed".to_string()))
        }
    }
}
