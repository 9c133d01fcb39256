//! Document references and upload kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a picked file.
///
/// Only identity matters; the string may be a path, URI, or storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of document a candidate can attach to their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Resume,
    Certificate,
}

impl UploadKind {
    /// Every kind, in display order.
    pub const ALL: [UploadKind; 2] = [UploadKind::Resume, UploadKind::Certificate];

    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            UploadKind::Resume => "Resume",
            UploadKind::Certificate => "Certificate",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_correct() {
        assert_eq!(UploadKind::Resume.display_name(), "Resume");
        assert_eq!(UploadKind::Certificate.display_name(), "Certificate");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&UploadKind::Certificate).unwrap();
        assert_eq!(json, "\"certificate\"");
    }

    #[test]
    fn document_ref_compares_by_location() {
        assert_eq!(DocumentRef::new("a.pdf"), DocumentRef::new("a.pdf"));
        assert_ne!(DocumentRef::new("a.pdf"), DocumentRef::new("b.pdf"));
    }
}
