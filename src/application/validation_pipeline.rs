//! Debounced re-validation of profile edits.
//!
//! Every edit pushes a snapshot into the pipeline. A result is emitted only
//! once no newer snapshot has arrived for the quiescence window, and it is
//! computed from the latest snapshot. Each new snapshot restarts the window.
//! Disposing the pipeline (or closing its session) drops any pending window
//! without emitting. Dropping the result receiver does not stop the
//! pipeline; results are simply skipped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::foundation::{DomainError, ErrorCode, SessionGuard, SessionToken};
use crate::domain::profile::{validate, Profile, ValidationError};

/// Configuration for the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPipelineConfig {
    /// Quiet period after the last edit before validating.
    pub debounce: Duration,
}

impl Default for ValidationPipelineConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
        }
    }
}

impl ValidationPipelineConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// One emitted validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Snapshot the errors were computed from.
    pub profile: Profile,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Handle to a running validation pipeline.
pub struct ValidationPipeline {
    input: mpsc::UnboundedSender<Profile>,
    scope: SessionGuard,
    task: JoinHandle<()>,
}

impl ValidationPipeline {
    /// Starts a pipeline scoped to `session`.
    ///
    /// Returns the handle and the receiver validation results are sent to.
    pub fn spawn(
        config: ValidationPipelineConfig,
        session: &SessionToken,
    ) -> (Self, mpsc::UnboundedReceiver<ValidationResult>) {
        let (input, snapshots) = mpsc::unbounded_channel();
        let (results, output) = mpsc::unbounded_channel();
        let scope = session.child_scope();
        let task = tokio::spawn(run(snapshots, results, scope.token(), config.debounce));

        (Self { input, scope, task }, output)
    }

    /// Queues a new snapshot, restarting the quiescence window.
    pub fn submit(&self, profile: Profile) -> Result<(), DomainError> {
        if self.scope.is_closed() {
            return Err(closed());
        }
        self.input.send(profile).map_err(|_| closed())
    }

    /// Stops the pipeline. A pending window never fires.
    pub fn dispose(&self) {
        self.scope.close();
    }

    pub fn is_disposed(&self) -> bool {
        self.scope.is_closed()
    }

    /// Returns true once the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ValidationPipeline {
    fn drop(&mut self) {
        self.scope.close();
    }
}

fn closed() -> DomainError {
    DomainError::new(ErrorCode::SessionClosed, "Validation pipeline is disposed")
}

async fn run(
    mut snapshots: mpsc::UnboundedReceiver<Profile>,
    results: mpsc::UnboundedSender<ValidationResult>,
    token: SessionToken,
    window: Duration,
) {
    let mut pending: Option<Profile> = None;

    loop {
        match pending.take() {
            None => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    next = snapshots.recv() => match next {
                        Some(profile) => pending = Some(profile),
                        None => break,
                    },
                }
            }
            Some(latest) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    next = snapshots.recv() => match next {
                        // Newer snapshot supersedes `latest` and restarts the window.
                        Some(profile) => pending = Some(profile),
                        None => break,
                    },
                    _ = tokio::time::sleep(window) => {
                        if !token.is_live() {
                            break;
                        }
                        // A dropped listener only silences results; edits keep flowing.
                        if results.is_closed() {
                            tracing::trace!("no validation listener; result skipped");
                        } else {
                            let errors = validate(&latest);
                            tracing::debug!(errors = errors.len(), "profile re-validated");
                            let _ = results.send(ValidationResult { profile: latest, errors });
                        }
                    }
                }
            }
        }
    }

    tracing::debug!(session = %token.session_id(), "validation pipeline stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile::new(name, "a@b.co", "", "School")
    }

    fn pipeline(
        session: &SessionGuard,
    ) -> (ValidationPipeline, mpsc::UnboundedReceiver<ValidationResult>) {
        ValidationPipeline::spawn(ValidationPipelineConfig::default(), &session.token())
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn emits_once_after_quiet_window() {
        let session = SessionGuard::new();
        let (pipeline, mut results) = pipeline(&session);

        pipeline.submit(profile("")).unwrap();
        advance(450).await;
        assert!(results.try_recv().is_err());

        advance(100).await;
        let result = results.try_recv().unwrap();
        assert_eq!(
            result.errors,
            vec![ValidationError::RequiredFieldMissing("Name")]
        );
        assert!(results.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_edits_emits_only_latest() {
        let session = SessionGuard::new();
        let (pipeline, mut results) = pipeline(&session);

        pipeline.submit(profile("")).unwrap();
        advance(300).await;
        pipeline.submit(profile("A")).unwrap();
        advance(300).await;
        pipeline.submit(profile("Ad")).unwrap();
        advance(300).await;
        assert!(results.try_recv().is_err());

        advance(250).await;
        let result = results.try_recv().unwrap();
        assert_eq!(result.profile.name, "Ad");
        assert!(result.is_valid());
        assert!(results.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separated_edits_each_emit() {
        let session = SessionGuard::new();
        let (pipeline, mut results) = pipeline(&session);

        pipeline.submit(profile("")).unwrap();
        advance(600).await;
        pipeline.submit(profile("A")).unwrap();
        advance(600).await;

        assert!(!results.try_recv().unwrap().is_valid());
        assert!(results.try_recv().unwrap().is_valid());
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_drops_pending_window() {
        let session = SessionGuard::new();
        let (pipeline, mut results) = pipeline(&session);

        pipeline.submit(profile("")).unwrap();
        advance(200).await;
        pipeline.dispose();
        advance(1000).await;

        assert!(results.try_recv().is_err());
        assert!(pipeline.is_disposed());
        assert!(pipeline.submit(profile("A")).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn session_close_stops_pipeline() {
        let session = SessionGuard::new();
        let (pipeline, mut results) = pipeline(&session);

        pipeline.submit(profile("")).unwrap();
        session.close();
        advance(1000).await;

        assert!(results.try_recv().is_err());
        assert!(pipeline.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_listener_keeps_pipeline_accepting_edits() {
        let session = SessionGuard::new();
        let (pipeline, results) = pipeline(&session);
        drop(results);

        pipeline.submit(profile("")).unwrap();
        advance(1000).await;

        assert!(pipeline.submit(profile("A")).is_ok());
        advance(1000).await;
        assert!(!pipeline.is_finished());
        assert!(!pipeline.is_disposed());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_window_is_respected() {
        let session = SessionGuard::new();
        let config = ValidationPipelineConfig::default().with_debounce(Duration::from_millis(50));
        let (pipeline, mut results) = ValidationPipeline::spawn(config, &session.token());

        pipeline.submit(profile("A")).unwrap();
        advance(60).await;

        assert!(results.try_recv().is_ok());
    }
}
