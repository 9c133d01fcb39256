use std::sync::Arc;

use jobboard::adapters::{
    SimulatedProfileService, SimulatedUploadService, ThreadRandomSource, TracingNotificationSink,
};
use jobboard::application::{JobBoardSession, SaveProfileError, SessionServices, UploadResolution};
use jobboard::config::{AppConfig, ConfigError, ValidationError};
use jobboard::domain::foundation::DomainError;
use jobboard::domain::profile::{DocumentRef, Profile, UploadKind};
use jobboard::ports::RandomSource;
use jobboard::telemetry::{self, TelemetryError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Config(ConfigError::ValidationFailed(err))
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandomSource::new());
    let services = SessionServices {
        uploads: Arc::new(SimulatedUploadService::new(
            Arc::clone(&random),
            config.upload.simulation(),
        )),
        profiles: Arc::new(SimulatedProfileService::new(
            Arc::clone(&random),
            config.save.simulation(),
        )),
        notifier: Arc::new(TracingNotificationSink),
        random,
    };

    let (session, mut results) =
        JobBoardSession::start(config.session_settings()?, services, Profile::default());

    // Typing into the form: a burst of edits collapses into one validation pass.
    session.edit_profile(|p| p.name = "Ada Lovelace".into())?;
    session.edit_profile(|p| p.email = "ada@example".into())?;
    session.edit_profile(|p| p.email = "ada@example.com".into())?;
    session.edit_profile(|p| p.phone_number = "+442071234567".into())?;
    if let Some(result) = results.recv().await {
        info!(errors = result.errors.len(), "live validation");
        for error in &result.errors {
            info!(field = error.field(), "{}", error);
        }
    }

    // Saving now is blocked by the missing school.
    if let Err(SaveProfileError::Invalid(report)) = session.save_profile().await {
        info!(problems = report.len(), "save blocked");
    }
    session.edit_profile(|p| p.school = "University of London".into())?;

    // Both documents upload concurrently.
    let resume = session.begin_upload(UploadKind::Resume, DocumentRef::new("file:///docs/resume.pdf"))?;
    let certificate = session.begin_upload(
        UploadKind::Certificate,
        DocumentRef::new("file:///docs/certificate.pdf"),
    )?;
    for resolution in futures::future::join_all([resume.resolved(), certificate.resolved()]).await {
        if let UploadResolution::Failed(err) = resolution {
            info!(error = %err, "upload can be retried");
        }
    }

    for _ in 0..8 {
        session.earn_points()?;
    }
    let summary = session.reward_summary();
    info!(
        points = summary.points,
        tier = %summary.current.name,
        progress = summary.progress,
        to_next = ?summary.points_to_next,
        "rewards"
    );

    match session.save_profile().await {
        Ok(()) => info!("profile saved"),
        Err(err) => info!(error = %err, "profile not saved"),
    }

    session.close();
    Ok(())
}
