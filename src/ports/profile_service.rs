//! ProfileService port - Persists a validated profile.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::Profile;

/// Errors that can occur while saving a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Save rejected: {0}")]
    Rejected(String),
}

/// Remote profile persistence.
///
/// Same single-resolution contract as [`UploadService`].
///
/// [`UploadService`]: super::UploadService
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn save(&self, profile: &Profile) -> Result<(), SaveError>;
}
