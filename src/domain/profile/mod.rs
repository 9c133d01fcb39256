//! Candidate profile and its validation rules.

mod document;
mod profile;
mod validation;

pub use document::{DocumentRef, UploadKind};
pub use profile::Profile;
pub use validation::{validate, ValidationError, ValidationReport};
