//! Form for adding and editing a grocery store.

use serde::Deserialize;

use super::FormErrors;
use crate::models::GroceryStore;

const TITLE_MIN: usize = 2;
const TITLE_MAX: usize = 30;
const ADDRESS_MIN: usize = 10;
const ADDRESS_MAX: usize = 60;

/// Raw store form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroceryStoreForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: String,
}

/// Store fields that passed validation.
#[derive(Debug, Clone)]
pub struct ValidStoreFields {
    pub title: String,
    pub address: String,
}

impl GroceryStoreForm {
    /// Pre-populate the form from an existing store for editing.
    #[must_use]
    pub fn from_store(store: &GroceryStore) -> Self {
        Self {
            title: store.title.clone(),
            address: store.address.clone(),
        }
    }

    /// Run every field rule.
    ///
    /// # Errors
    ///
    /// Returns the collected field messages if any rule failed.
    pub fn validate(&self) -> Result<ValidStoreFields, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.is_empty() {
            errors.add("title", "Store name is required.");
        } else {
            let len = self.title.chars().count();
            if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
                errors.add(
                    "title",
                    format!("Store name must be between {TITLE_MIN} and {TITLE_MAX} characters."),
                );
            }
        }

        if self.address.is_empty() {
            errors.add("address", "Address is required.");
        } else {
            let len = self.address.chars().count();
            if !(ADDRESS_MIN..=ADDRESS_MAX).contains(&len) {
                errors.add(
                    "address",
                    format!("Address must be between {ADDRESS_MIN} and {ADDRESS_MAX} characters."),
                );
            }
        }

        if errors.is_empty() {
            Ok(ValidStoreFields {
                title: self.title.clone(),
                address: self.address.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(title: &str, address: &str) -> GroceryStoreForm {
        GroceryStoreForm {
            title: title.to_owned(),
            address: address.to_owned(),
        }
    }

    #[test]
    fn test_valid_bounds() {
        assert!(form("ab", "123 Main Street").validate().is_ok());
        assert!(form(&"a".repeat(30), &"b".repeat(10)).validate().is_ok());
        assert!(form("Trader Joe's", &"c".repeat(60)).validate().is_ok());
    }

    #[test]
    fn test_title_out_of_bounds() {
        let errors = form("a", "123 Main Street").validate().unwrap_err();
        assert!(errors.first("title").is_some());
        assert!(errors.first("address").is_none());

        let errors = form(&"a".repeat(31), "123 Main Street")
            .validate()
            .unwrap_err();
        assert!(errors.first("title").is_some());
    }

    #[test]
    fn test_address_out_of_bounds() {
        let errors = form("Safeway", &"b".repeat(9)).validate().unwrap_err();
        assert!(errors.first("address").is_some());

        let errors = form("Safeway", &"b".repeat(61)).validate().unwrap_err();
        assert!(errors.first("address").is_some());
    }

    #[test]
    fn test_every_rule_runs() {
        // Both fields empty: both fields carry a message.
        let errors = form("", "").validate().unwrap_err();
        assert_eq!(errors.first("title"), Some("Store name is required."));
        assert_eq!(errors.first("address"), Some("Address is required."));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // Two multibyte characters meet the 2-character minimum.
        assert!(form("éé", "123 Main Street").validate().is_ok());
    }
}
