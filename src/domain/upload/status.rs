//! Upload status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of one document upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// Nothing picked yet.
    #[default]
    NotStarted,

    /// Transfer in flight. No second upload of the same kind may start.
    Uploading,

    /// Transfer finished and the profile holds the new reference.
    Completed,

    /// Transfer failed. Stays here until the user retries.
    Failed,
}

impl UploadStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }
}

impl StateMachine for UploadStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use UploadStatus::*;
        matches!(
            (self, target),
            (NotStarted, Uploading)
                | (Uploading, Completed)
                | (Uploading, Failed)
            // Retry
                | (Failed, Uploading)
            // Replace an uploaded document
                | (Completed, Uploading)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use UploadStatus::*;
        match self {
            NotStarted => vec![Uploading],
            Uploading => vec![Completed, Failed],
            Completed => vec![Uploading],
            Failed => vec![Uploading],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_status_is_not_started() {
        assert_eq!(UploadStatus::default(), UploadStatus::NotStarted);
    }

    #[test]
    fn not_started_can_only_begin_uploading() {
        let status = UploadStatus::NotStarted;
        assert_eq!(
            status.transition_to(UploadStatus::Uploading),
            Ok(UploadStatus::Uploading)
        );
        assert!(status.transition_to(UploadStatus::Completed).is_err());
        assert!(status.transition_to(UploadStatus::Failed).is_err());
    }

    #[test]
    fn uploading_resolves_to_completed_or_failed() {
        let status = UploadStatus::Uploading;
        assert!(status.can_transition_to(&UploadStatus::Completed));
        assert!(status.can_transition_to(&UploadStatus::Failed));
    }

    #[test]
    fn uploading_cannot_restart() {
        assert!(!UploadStatus::Uploading.can_transition_to(&UploadStatus::Uploading));
    }

    #[test]
    fn failed_retries_directly_into_uploading() {
        assert!(UploadStatus::Failed.can_transition_to(&UploadStatus::Uploading));
        assert!(!UploadStatus::Failed.can_transition_to(&UploadStatus::NotStarted));
    }

    #[test]
    fn no_status_is_terminal() {
        for status in [
            UploadStatus::NotStarted,
            UploadStatus::Uploading,
            UploadStatus::Completed,
            UploadStatus::Failed,
        ] {
            assert!(!status.is_terminal(), "{:?} should not be terminal", status);
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            UploadStatus::NotStarted,
            UploadStatus::Uploading,
            UploadStatus::Completed,
            UploadStatus::Failed,
        ] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }
}
