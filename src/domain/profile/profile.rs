//! Candidate profile snapshot.

use serde::{Deserialize, Serialize};

use super::{DocumentRef, UploadKind};

/// Candidate profile as edited in the profile screen.
///
/// The UI owns the live copy; the core only ever sees snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub school: String,
    pub resume_ref: Option<DocumentRef>,
    pub certificate_ref: Option<DocumentRef>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        school: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            school: school.into(),
            resume_ref: None,
            certificate_ref: None,
        }
    }

    pub fn resume_uploaded(&self) -> bool {
        self.resume_ref.is_some()
    }

    pub fn certificate_uploaded(&self) -> bool {
        self.certificate_ref.is_some()
    }

    /// Returns the stored reference for a document kind.
    pub fn document(&self, kind: UploadKind) -> Option<&DocumentRef> {
        match kind {
            UploadKind::Resume => self.resume_ref.as_ref(),
            UploadKind::Certificate => self.certificate_ref.as_ref(),
        }
    }

    /// Stores the reference for a document kind, returning the old one.
    pub fn attach(&mut self, kind: UploadKind, doc: DocumentRef) -> Option<DocumentRef> {
        let slot = match kind {
            UploadKind::Resume => &mut self.resume_ref,
            UploadKind::Certificate => &mut self.certificate_ref,
        };
        slot.replace(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploaded_flags_follow_references() {
        let mut profile = Profile::new("Ada", "ada@example.com", "", "MIT");
        assert!(!profile.resume_uploaded());
        assert!(!profile.certificate_uploaded());

        profile.attach(UploadKind::Resume, DocumentRef::new("cv.pdf"));

        assert!(profile.resume_uploaded());
        assert!(!profile.certificate_uploaded());
    }

    #[test]
    fn attach_returns_replaced_reference() {
        let mut profile = Profile::default();
        profile.attach(UploadKind::Certificate, DocumentRef::new("old.pdf"));

        let old = profile.attach(UploadKind::Certificate, DocumentRef::new("new.pdf"));

        assert_eq!(old, Some(DocumentRef::new("old.pdf")));
        assert_eq!(
            profile.document(UploadKind::Certificate),
            Some(&DocumentRef::new("new.pdf"))
        );
    }

    #[test]
    fn profile_serializes_camel_case() {
        let profile = Profile::new("A", "a@b.co", "+1234", "S");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["phoneNumber"], "+1234");
        assert!(json["resumeRef"].is_null());
    }
}
