//! BeginUpload - Drives the per-kind document upload lifecycle.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::foundation::{DomainError, SessionToken, StateStore};
use crate::domain::notification::Notification;
use crate::domain::profile::{DocumentRef, Profile, UploadKind};
use crate::domain::upload::{UploadStatus, UploadTracker};
use crate::ports::{NotificationSink, UploadError, UploadService};

/// Command to upload a picked document.
#[derive(Debug, Clone)]
pub struct BeginUploadCommand {
    pub kind: UploadKind,
    pub doc: DocumentRef,
}

/// How an accepted upload ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResolution {
    /// Profile now holds the returned reference.
    Completed(DocumentRef),
    /// Profile untouched; status is `Failed`.
    Failed(UploadError),
    /// Session was torn down before the outcome could be applied.
    Discarded,
}

/// Handle to an in-flight upload.
#[derive(Debug)]
pub struct UploadTicket {
    pub kind: UploadKind,
    task: JoinHandle<UploadResolution>,
}

impl UploadTicket {
    /// Waits for the upload to resolve.
    pub async fn resolved(self) -> UploadResolution {
        self.task.await.unwrap_or(UploadResolution::Discarded)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Upload state machine for every [`UploadKind`].
///
/// Each kind moves `NotStarted -> Uploading -> Completed | Failed`
/// independently. A second upload of a kind that is already `Uploading`
/// is rejected; a `Failed` kind may be retried straight into `Uploading`.
pub struct UploadStateMachine {
    service: Arc<dyn UploadService>,
    notifier: Arc<dyn NotificationSink>,
    profile: Arc<StateStore<Profile>>,
    statuses: Arc<StateStore<UploadTracker>>,
    token: SessionToken,
}

impl UploadStateMachine {
    pub fn new(
        service: Arc<dyn UploadService>,
        notifier: Arc<dyn NotificationSink>,
        profile: Arc<StateStore<Profile>>,
        token: SessionToken,
    ) -> Self {
        let statuses = Arc::new(StateStore::new(UploadTracker::new(), token.clone()));
        Self {
            service,
            notifier,
            profile,
            statuses,
            token,
        }
    }

    pub fn status(&self, kind: UploadKind) -> UploadStatus {
        self.statuses.get().status(kind)
    }

    /// Observable per-kind statuses.
    pub fn statuses(&self) -> Arc<StateStore<UploadTracker>> {
        Arc::clone(&self.statuses)
    }

    /// Starts an upload.
    ///
    /// Fails with `UploadInFlight` if `cmd.kind` is already uploading, or
    /// `SessionClosed` once the session is torn down.
    pub fn handle(&self, cmd: BeginUploadCommand) -> Result<UploadTicket, DomainError> {
        let BeginUploadCommand { kind, doc } = cmd;

        // 1. Claim the kind; rejects re-entrant starts atomically.
        self.statuses.try_update(|tracker| tracker.begin(kind))?;
        tracing::debug!(kind = %kind, doc = %doc, "upload started");

        // 2. Resolve in the background.
        let service = Arc::clone(&self.service);
        let notifier = Arc::clone(&self.notifier);
        let profile = Arc::clone(&self.profile);
        let statuses = Arc::clone(&self.statuses);
        let token = self.token.clone();

        let task = tokio::spawn(async move {
            let outcome = service.upload(&doc, kind).await;

            // 3. Never touch a torn-down session.
            if !token.is_live() {
                tracing::warn!(kind = %kind, "session closed; discarding upload resolution");
                return UploadResolution::Discarded;
            }

            match apply(outcome, kind, &profile, &statuses) {
                Ok(UploadResolution::Failed(err)) => {
                    tracing::warn!(kind = %kind, error = %err, "upload failed");
                    notifier.notify(Notification::upload_failed(kind));
                    UploadResolution::Failed(err)
                }
                Ok(resolution) => {
                    tracing::info!(kind = %kind, "upload completed");
                    resolution
                }
                Err(err) => {
                    tracing::warn!(kind = %kind, error = %err, "discarding upload resolution");
                    UploadResolution::Discarded
                }
            }
        });

        Ok(UploadTicket { kind, task })
    }
}

fn apply(
    outcome: Result<DocumentRef, UploadError>,
    kind: UploadKind,
    profile: &StateStore<Profile>,
    statuses: &StateStore<UploadTracker>,
) -> Result<UploadResolution, DomainError> {
    match outcome {
        Ok(resolved) => {
            statuses.try_update(|tracker| tracker.resolve(kind, true))?;
            let stored = resolved.clone();
            profile.update(move |p| {
                p.attach(kind, stored);
            })?;
            Ok(UploadResolution::Completed(resolved))
        }
        Err(err) => {
            statuses.try_update(|tracker| tracker.resolve(kind, false))?;
            Ok(UploadResolution::Failed(err))
        }
    }
}
