//! JobBoardSession - One signed-in user's view-model state.
//!
//! Owns the profile, the validation pipeline, the upload state machine,
//! the reward state and the save workflow, all tied to one
//! [`SessionGuard`]. Closing the session (or dropping it) cancels pending
//! validation windows and discards any upload or save that resolves
//! afterwards.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use super::handlers::{
    BeginUploadCommand, EarnPointsHandler, SaveProfileCommand, SaveProfileError,
    SaveProfileHandler, UploadStateMachine, UploadTicket,
};
use super::validation_pipeline::{ValidationPipeline, ValidationPipelineConfig, ValidationResult};
use crate::domain::foundation::{DomainError, SessionGuard, SessionId, StateStore};
use crate::domain::profile::{DocumentRef, Profile, UploadKind};
use crate::domain::rewards::{EarnOutcome, EarnRange, RewardState, RewardSummary, TierTable};
use crate::domain::upload::{UploadStatus, UploadTracker};
use crate::ports::{NotificationSink, ProfileService, RandomSource, UploadService};

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub validation: ValidationPipelineConfig,
    pub earn_range: EarnRange,
    pub tiers: TierTable,
    /// Points the user starts the session with.
    pub seed_points: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            validation: ValidationPipelineConfig::default(),
            earn_range: EarnRange::default(),
            tiers: TierTable::standard(),
            seed_points: 0,
        }
    }
}

/// Collaborators a session talks to.
#[derive(Clone)]
pub struct SessionServices {
    pub uploads: Arc<dyn UploadService>,
    pub profiles: Arc<dyn ProfileService>,
    pub notifier: Arc<dyn NotificationSink>,
    pub random: Arc<dyn RandomSource>,
}

pub struct JobBoardSession {
    guard: SessionGuard,
    profile: Arc<StateStore<Profile>>,
    pipeline: ValidationPipeline,
    uploads: UploadStateMachine,
    rewards: EarnPointsHandler,
    saver: SaveProfileHandler,
}

impl JobBoardSession {
    /// Opens a session around `initial`.
    ///
    /// Must be called inside a tokio runtime. Returns the session and the
    /// stream of debounced validation results.
    pub fn start(
        settings: SessionSettings,
        services: SessionServices,
        initial: Profile,
    ) -> (Self, mpsc::UnboundedReceiver<ValidationResult>) {
        let guard = SessionGuard::new();
        let token = guard.token();

        let profile = Arc::new(StateStore::new(initial, token.clone()));
        let (pipeline, results) = ValidationPipeline::spawn(settings.validation, &token);
        let uploads = UploadStateMachine::new(
            services.uploads,
            Arc::clone(&services.notifier),
            Arc::clone(&profile),
            token.clone(),
        );
        let rewards = EarnPointsHandler::new(
            Arc::new(settings.tiers),
            settings.earn_range,
            services.random,
            Arc::clone(&services.notifier),
            settings.seed_points,
            token.clone(),
        );
        let saver = SaveProfileHandler::new(services.profiles, services.notifier, token);

        tracing::info!(session = %guard.id(), "session started");

        (
            Self {
                guard,
                profile,
                pipeline,
                uploads,
                rewards,
                saver,
            },
            results,
        )
    }

    pub fn id(&self) -> SessionId {
        self.guard.id()
    }

    pub fn is_open(&self) -> bool {
        !self.guard.is_closed()
    }

    // === Profile ===

    /// Current profile snapshot.
    pub fn profile(&self) -> Profile {
        self.profile.get()
    }

    pub fn subscribe_profile(&self) -> watch::Receiver<Profile> {
        self.profile.subscribe()
    }

    /// Applies a UI edit and schedules re-validation.
    pub fn edit_profile(&self, edit: impl FnOnce(&mut Profile)) -> Result<(), DomainError> {
        self.profile.update(edit)?;
        self.pipeline.submit(self.profile.get())
    }

    /// Validates and saves the current profile.
    pub async fn save_profile(&self) -> Result<(), SaveProfileError> {
        self.saver
            .handle(SaveProfileCommand {
                profile: self.profile.get(),
            })
            .await
    }

    // === Uploads ===

    pub fn begin_upload(&self, kind: UploadKind, doc: DocumentRef) -> Result<UploadTicket, DomainError> {
        self.uploads.handle(BeginUploadCommand { kind, doc })
    }

    pub fn upload_status(&self, kind: UploadKind) -> UploadStatus {
        self.uploads.status(kind)
    }

    pub fn subscribe_uploads(&self) -> watch::Receiver<UploadTracker> {
        self.uploads.statuses().subscribe()
    }

    // === Rewards ===

    pub fn earn_points(&self) -> Result<EarnOutcome, DomainError> {
        self.rewards.handle()
    }

    pub fn reward_state(&self) -> RewardState {
        self.rewards.state()
    }

    pub fn reward_summary(&self) -> RewardSummary {
        self.rewards.summary()
    }

    pub fn subscribe_rewards(&self) -> watch::Receiver<RewardState> {
        self.rewards.subscribe()
    }

    // === Teardown ===

    /// Tears the session down. Idempotent.
    pub fn close(&self) {
        if self.is_open() {
            tracing::info!(session = %self.id(), "session closed");
        }
        self.pipeline.dispose();
        self.guard.close();
    }
}
