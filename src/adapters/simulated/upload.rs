//! Simulated document upload.

use async_trait::async_trait;
use std::sync::Arc;

use super::SimulationProfile;
use crate::domain::profile::{DocumentRef, UploadKind};
use crate::ports::{RandomSource, UploadError, UploadService};

/// Upload service that fakes a transfer.
pub struct SimulatedUploadService {
    random: Arc<dyn RandomSource>,
    simulation: SimulationProfile,
}

impl SimulatedUploadService {
    pub fn new(random: Arc<dyn RandomSource>, simulation: SimulationProfile) -> Self {
        Self { random, simulation }
    }
}

#[async_trait]
impl UploadService for SimulatedUploadService {
    async fn upload(&self, doc: &DocumentRef, kind: UploadKind) -> Result<DocumentRef, UploadError> {
        // One draw per call, taken before the wait.
        let succeeds = self.random.chance(self.simulation.success_probability);
        tokio::time::sleep(self.simulation.latency).await;

        if succeeds {
            tracing::debug!(kind = %kind, doc = %doc, "simulated upload succeeded");
            Ok(doc.clone())
        } else {
            tracing::debug!(kind = %kind, doc = %doc, "simulated upload failed");
            Err(UploadError::Network(format!(
                "simulated transfer of {} failed",
                kind.display_name().to_lowercase()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SequenceRandomSource;
    use std::time::Duration;
    use tokio::time::Instant;

    fn service(random: SequenceRandomSource) -> SimulatedUploadService {
        SimulatedUploadService::new(
            Arc::new(random),
            SimulationProfile::new(Duration::from_secs(2), 0.9),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn success_returns_same_reference_after_latency() {
        let svc = service(SequenceRandomSource::always_succeed());
        let started = Instant::now();

        let result = svc
            .upload(&DocumentRef::new("cv.pdf"), UploadKind::Resume)
            .await;

        assert_eq!(result, Ok(DocumentRef::new("cv.pdf")));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn failure_is_a_network_error() {
        let svc = service(SequenceRandomSource::always_fail());

        let result = svc
            .upload(&DocumentRef::new("cert.pdf"), UploadKind::Certificate)
            .await;

        assert!(matches!(result, Err(UploadError::Network(msg)) if msg.contains("certificate")));
    }
}
