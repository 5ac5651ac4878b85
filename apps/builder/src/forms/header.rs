//! Header section editor: name, role, contact and location.
//!
//! Writes go straight to the store; the returned issue (if any) is inline
//! display text only. An invalid email is still persisted.

use crate::forms::validate::is_valid_email;
use crate::forms::Advisory;
use crate::models::ResumeData;
use crate::store::ResumeStore;

/// Inline issue for a single header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    NameRequired,
    InvalidEmail,
}

impl FieldIssue {
    pub fn message(&self) -> &'static str {
        match self {
            FieldIssue::NameRequired => "Name is required",
            FieldIssue::InvalidEmail => "Invalid email address",
        }
    }
}

/// Writes the name and reports whether the required-field check fails.
pub fn set_name(store: &mut ResumeStore, value: &str) -> Option<FieldIssue> {
    store.set_name(value);
    if value.trim().is_empty() {
        Some(FieldIssue::NameRequired)
    } else {
        None
    }
}

/// Writes the email and reports a shape issue for non-empty invalid values.
pub fn set_email(store: &mut ResumeStore, value: &str) -> Option<FieldIssue> {
    store.set_email(value);
    if !value.is_empty() && !is_valid_email(value) {
        Some(FieldIssue::InvalidEmail)
    } else {
        None
    }
}

pub fn set_role(store: &mut ResumeStore, value: &str) {
    store.set_role(value);
}

pub fn set_phone(store: &mut ResumeStore, value: &str) {
    store.set_phone(value);
}

pub fn set_location(store: &mut ResumeStore, value: &str) {
    store.set_location(value);
}

/// Header advisories for the aggregate-level report.
pub fn advisories(data: &ResumeData) -> Vec<Advisory> {
    let mut issues = Vec::new();
    if data.name.trim().is_empty() {
        issues.push(Advisory {
            section: "header",
            field: "name".to_string(),
            message: FieldIssue::NameRequired.message().to_string(),
        });
    }
    if !data.email.is_empty() && !is_valid_email(&data.email) {
        issues.push(Advisory {
            section: "header",
            field: "email".to_string(),
            message: FieldIssue::InvalidEmail.message().to_string(),
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_is_written_but_flagged() {
        let mut store = ResumeStore::new();
        let issue = set_email(&mut store, "nope");
        assert_eq!(issue, Some(FieldIssue::InvalidEmail));
        assert_eq!(store.data().email, "nope");
    }

    #[test]
    fn test_empty_email_is_not_flagged() {
        let mut store = ResumeStore::new();
        assert_eq!(set_email(&mut store, ""), None);
    }

    #[test]
    fn test_blank_name_is_written_but_flagged() {
        let mut store = ResumeStore::new();
        set_name(&mut store, "Ada");
        let issue = set_name(&mut store, "   ");
        assert_eq!(issue, Some(FieldIssue::NameRequired));
        assert_eq!(store.data().name, "   ");
    }

    #[test]
    fn test_valid_header_produces_no_advisories() {
        let mut store = ResumeStore::new();
        set_name(&mut store, "Ada");
        set_email(&mut store, "ada@engine.dev");
        assert!(advisories(store.data()).is_empty());
    }
}
