//! Per-kind upload status bookkeeping.

use serde::{Deserialize, Serialize};

use super::UploadStatus;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::profile::UploadKind;

/// One independent [`UploadStatus`] per [`UploadKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTracker {
    resume: UploadStatus,
    certificate: UploadStatus,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, kind: UploadKind) -> UploadStatus {
        match kind {
            UploadKind::Resume => self.resume,
            UploadKind::Certificate => self.certificate,
        }
    }

    pub fn in_flight(&self, kind: UploadKind) -> bool {
        self.status(kind).is_in_flight()
    }

    /// Moves `kind` into `Uploading`.
    ///
    /// Fails with `UploadInFlight` if an upload of that kind is already
    /// running; other kinds are unaffected.
    pub fn begin(&mut self, kind: UploadKind) -> Result<(), DomainError> {
        let current = self.status(kind);
        if current.is_in_flight() {
            return Err(DomainError::new(
                ErrorCode::UploadInFlight,
                format!("{} upload already in progress", kind),
            )
            .with_detail("kind", kind.display_name()));
        }
        let next = current.transition_to(UploadStatus::Uploading)?;
        *self.slot(kind) = next;
        Ok(())
    }

    /// Applies the resolution of an in-flight upload.
    pub fn resolve(&mut self, kind: UploadKind, succeeded: bool) -> Result<UploadStatus, DomainError> {
        let target = if succeeded {
            UploadStatus::Completed
        } else {
            UploadStatus::Failed
        };
        let next = self.status(kind).transition_to(target)?;
        *self.slot(kind) = next;
        Ok(next)
    }

    fn slot(&mut self, kind: UploadKind) -> &mut UploadStatus {
        match kind {
            UploadKind::Resume => &mut self.resume,
            UploadKind::Certificate => &mut self.certificate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_start_not_started() {
        let tracker = UploadTracker::new();
        for kind in UploadKind::ALL {
            assert_eq!(tracker.status(kind), UploadStatus::NotStarted);
        }
    }

    #[test]
    fn kinds_are_independent() {
        let mut tracker = UploadTracker::new();
        tracker.begin(UploadKind::Resume).unwrap();
        tracker.begin(UploadKind::Certificate).unwrap();

        tracker.resolve(UploadKind::Resume, true).unwrap();

        assert_eq!(tracker.status(UploadKind::Resume), UploadStatus::Completed);
        assert_eq!(tracker.status(UploadKind::Certificate), UploadStatus::Uploading);
    }

    #[test]
    fn second_begin_while_uploading_is_rejected() {
        let mut tracker = UploadTracker::new();
        tracker.begin(UploadKind::Resume).unwrap();

        let err = tracker.begin(UploadKind::Resume).unwrap_err();

        assert_eq!(err.code, ErrorCode::UploadInFlight);
        assert_eq!(tracker.status(UploadKind::Resume), UploadStatus::Uploading);
    }

    #[test]
    fn failure_then_retry_reenters_uploading() {
        let mut tracker = UploadTracker::new();
        tracker.begin(UploadKind::Certificate).unwrap();
        assert_eq!(
            tracker.resolve(UploadKind::Certificate, false).unwrap(),
            UploadStatus::Failed
        );

        tracker.begin(UploadKind::Certificate).unwrap();

        assert!(tracker.in_flight(UploadKind::Certificate));
    }

    #[test]
    fn resolve_without_begin_is_invalid() {
        let mut tracker = UploadTracker::new();
        let err = tracker.resolve(UploadKind::Resume, true).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }
}
