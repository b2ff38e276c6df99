// Rust guideline compliant 2026-10-13

//! Contact form validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Error message for a missing required field.
pub const REQUIRED: &str = "required";
/// Error message for a malformed email address.
pub const INVALID_FORMAT: &str = "invalid format";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A contact submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Contact person.
    pub name: String,
    /// Project inquiry body.
    pub content: String,
    /// Reply address.
    pub email: String,
}

impl ContactForm {
    /// Returns a mutable reference to a field's value.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Content => &mut self.content,
            ContactField::Email => &mut self.email,
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    /// The name field.
    Name,
    /// The content field.
    Content,
    /// The email field.
    Email,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => f.write_str("name"),
            ContactField::Content => f.write_str("content"),
            ContactField::Email => f.write_str("email"),
        }
    }
}

/// Field-keyed validation errors. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields in error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message for a field, if any.
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Records an error for a field.
    pub fn insert(&mut self, field: ContactField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    /// Drops the error for a field, typically after the user edits it.
    pub fn clear_field(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    /// Iterates over errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Validates a contact submission.
///
/// - `name` and `content` must be non-blank after trimming.
/// - `email` must be non-blank and shaped like `local@domain.tld`.
pub fn validate_contact(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(ContactField::Name, REQUIRED);
    }

    if form.content.trim().is_empty() {
        errors.insert(ContactField::Content, REQUIRED);
    }

    if form.email.trim().is_empty() {
        errors.insert(ContactField::Email, REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(ContactField::Email, INVALID_FORMAT);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, content: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            content: content.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_all_blank() {
        let errors = validate_contact(&form(" ", "", "\t"));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(ContactField::Email), Some(REQUIRED));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@studio.example.kr"] {
            assert!(validate_contact(&form("n", "c", ok)).is_empty(), "{ok}");
        }
        for bad in ["a@b", "a b@c.d", "@b.com", "a@@b.com", "a@b."] {
            assert_eq!(
                validate_contact(&form("n", "c", bad)).get(ContactField::Email),
                Some(INVALID_FORMAT),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate_contact(&form("", "", "x"));
        errors.clear_field(ContactField::Name);
        assert_eq!(errors.get(ContactField::Name), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_serializes_as_map() {
        let errors = validate_contact(&form("", "x", "a@b.com"));
        assert_eq!(serde_json::to_string(&errors).unwrap(), r#"{"name":"required"}"#);
    }
}
