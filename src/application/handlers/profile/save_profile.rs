//! SaveProfile - Command handler for the "save profile" use case.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::SessionToken;
use crate::domain::notification::Notification;
use crate::domain::profile::{Profile, ValidationReport};
use crate::ports::{NotificationSink, ProfileService, SaveError};

/// Command to save a profile snapshot.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub profile: Profile,
}

/// Why a save did not go through. Every variant is recoverable: the caller
/// may fix the profile and call the handler again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveProfileError {
    /// Validation failed; the service was never called.
    #[error("Profile is invalid:\n{0}")]
    Invalid(ValidationReport),

    #[error("Profile service failed: {0}")]
    Service(#[from] SaveError),

    /// Session closed while the save was in flight.
    #[error("Session closed before the save resolved")]
    Discarded,
}

/// Handler for saving profiles.
pub struct SaveProfileHandler {
    service: Arc<dyn ProfileService>,
    notifier: Arc<dyn NotificationSink>,
    token: SessionToken,
}

impl SaveProfileHandler {
    pub fn new(
        service: Arc<dyn ProfileService>,
        notifier: Arc<dyn NotificationSink>,
        token: SessionToken,
    ) -> Self {
        Self {
            service,
            notifier,
            token,
        }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<(), SaveProfileError> {
        if !self.token.is_live() {
            return Err(SaveProfileError::Discarded);
        }

        // 1. Validate before touching the network
        if let Some(report) = ValidationReport::check(&cmd.profile) {
            tracing::debug!(errors = report.len(), "save blocked by validation");
            self.notifier.notify(Notification::validation_failed(&report));
            return Err(SaveProfileError::Invalid(report));
        }

        // 2. Persist
        let outcome = self.service.save(&cmd.profile).await;

        // 3. Drop the outcome if the session went away meanwhile
        if !self.token.is_live() {
            tracing::warn!("session closed; discarding save resolution");
            return Err(SaveProfileError::Discarded);
        }

        match outcome {
            Ok(()) => {
                tracing::info!("profile saved");
                self.notifier.notify(Notification::profile_saved());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile save failed");
                self.notifier.notify(Notification::save_failed(&err));
                Err(SaveProfileError::Service(err))
            }
        }
    }
}
