//! Form binding and validation.
//!
//! Each form deserializes the raw `application/x-www-form-urlencoded` fields
//! into owned strings, then validates them explicitly, field by field. Every
//! rule runs; messages collect into a [`FormErrors`] map keyed by field name.
//! A submission is accepted only when the map is empty, and a failed
//! submission is re-rendered with the original input preserved.
//!
//! Checks that need the data model (username taken, credential match, store
//! existence) run after the field checks, against state the handler supplies.

pub mod auth;
pub mod item;
pub mod store;

pub use auth::{LoginForm, SignUpForm};
pub use item::{GroceryItemForm, ValidItemFields};
pub use store::{GroceryStoreForm, ValidStoreFields};

use std::collections::BTreeMap;

/// Pseudo-field key for errors that belong to the whole form.
pub const FORM_FIELD: &str = "__form__";

/// Field-keyed validation messages.
///
/// Empty means the submission is valid.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    /// Attach a message to a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// Attach a message to the form as a whole.
    pub fn add_form(&mut self, message: impl Into<String>) {
        self.add(FORM_FIELD, message);
    }

    /// True when no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message attached to a field, for template display.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// First form-level message, for template display.
    #[must_use]
    pub fn form(&self) -> Option<&str> {
        self.first(FORM_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let errors = FormErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.first("title"), None);
        assert_eq!(errors.form(), None);
    }

    #[test]
    fn test_first_returns_earliest_message() {
        let mut errors = FormErrors::default();
        errors.add("title", "too short");
        errors.add("title", "also bad");
        assert!(!errors.is_empty());
        assert_eq!(errors.first("title"), Some("too short"));
    }

    #[test]
    fn test_form_level_messages_are_separate() {
        let mut errors = FormErrors::default();
        errors.add_form("Invalid username or password.");
        assert_eq!(errors.form(), Some("Invalid username or password."));
        assert_eq!(errors.first("username"), None);
    }
}
