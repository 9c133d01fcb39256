//! User-facing notifications emitted by the core.
//!
//! The core only builds structured `{title, message}` events; how they are
//! rendered (toast, alert, log line) is up to the sink.

use serde::Serialize;

use super::foundation::Timestamp;
use super::profile::{UploadKind, ValidationReport};
use super::rewards::RewardTier;

/// What kind of event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Validation,
    Upload,
    Save,
    Achievement,
}

/// Whether a notification reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub category: NotificationCategory,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub at: Timestamp,
}

impl Notification {
    pub fn new(
        category: NotificationCategory,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            level,
            title: title.into(),
            message: message.into(),
            at: Timestamp::now(),
        }
    }

    pub fn validation_failed(report: &ValidationReport) -> Self {
        Self::new(
            NotificationCategory::Validation,
            NotificationLevel::Error,
            "Validation Error",
            report.to_string(),
        )
    }

    pub fn upload_failed(kind: UploadKind) -> Self {
        Self::new(
            NotificationCategory::Upload,
            NotificationLevel::Error,
            "Upload Failed",
            format!("Failed to upload {}. Please try again.", kind.display_name().to_lowercase()),
        )
    }

    pub fn profile_saved() -> Self {
        Self::new(
            NotificationCategory::Save,
            NotificationLevel::Info,
            "Profile Saved",
            "Your profile has been updated.",
        )
    }

    pub fn save_failed(reason: impl std::fmt::Display) -> Self {
        Self::new(
            NotificationCategory::Save,
            NotificationLevel::Error,
            "Save Failed",
            format!("Could not save your profile: {}. Please try again.", reason),
        )
    }

    pub fn tier_achieved(tier: &RewardTier) -> Self {
        Self::new(
            NotificationCategory::Achievement,
            NotificationLevel::Info,
            "New Tier Unlocked!",
            format!("Congratulations! You reached {} tier.", tier.name),
        )
    }
}
