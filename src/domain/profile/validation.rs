//! Profile validation rules.
//!
//! [`validate`] is pure and total: every rule runs on every call and all
//! violations are reported, in field declaration order (name, email,
//! phone, school).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

use super::Profile;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is a valid regex")
});

// Optional '+', leading 1-9, then 1 to 14 more digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern is a valid regex"));

/// A single broken profile rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("{0} is required")]
    RequiredFieldMissing(&'static str),
}

impl ValidationError {
    /// Name of the profile field the error points at.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "Email",
            ValidationError::InvalidPhone => "Phone",
            ValidationError::RequiredFieldMissing(field) => field,
        }
    }
}

/// Checks a profile snapshot against every rule.
pub fn validate(profile: &Profile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.name.is_empty() {
        errors.push(ValidationError::RequiredFieldMissing("Name"));
    }
    if !is_valid_email(&profile.email) {
        errors.push(ValidationError::InvalidEmail);
    }
    if !profile.phone_number.is_empty() && !is_valid_phone(&profile.phone_number) {
        errors.push(ValidationError::InvalidPhone);
    }
    if profile.school.is_empty() {
        errors.push(ValidationError::RequiredFieldMissing("School"));
    }

    errors
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Non-empty set of validation errors surfaced to the user as one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Runs the rules and returns a report only if something failed.
    pub fn check(profile: &Profile) -> Option<Self> {
        Self::from_errors(validate(profile))
    }

    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ValidationReport {}
