//! UploadService port - Transfers a picked document to storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::{DocumentRef, UploadKind};

/// Errors that can occur while uploading a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Transfer failed on the wire
    #[error("Network error: {0}")]
    Network(String),

    /// Remote side refused the document
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// Picked file could not be read
    #[error("Cannot read document: {0}")]
    Unreadable(DocumentRef),
}

/// Uploads documents on behalf of the profile screen.
///
/// Implementations must resolve exactly once per call, and never
/// synchronously from the caller's point of view.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Uploads `doc` and returns the reference the profile should keep.
    async fn upload(&self, doc: &DocumentRef, kind: UploadKind) -> Result<DocumentRef, UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn UploadService) {}

    #[test]
    fn errors_display_their_cause() {
        assert_eq!(
            UploadError::Network("timeout".into()).to_string(),
            "Network error: timeout"
        );
        assert_eq!(
            UploadError::Unreadable(DocumentRef::new("cv.pdf")).to_string(),
            "Cannot read document: cv.pdf"
        );
    }
}
