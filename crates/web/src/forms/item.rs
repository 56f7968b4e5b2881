//! Form for adding and editing a grocery item.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use grocery_core::{ItemCategory, StoreId};

use super::FormErrors;
use crate::models::{GroceryItem, GroceryStore};

/// Raw item form fields as submitted.
///
/// `store_id` is the value of the store select; the empty string means
/// "no store".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroceryItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub store_id: String,
}

/// Item fields that passed validation.
#[derive(Debug, Clone)]
pub struct ValidItemFields {
    pub name: String,
    pub price: Decimal,
    pub category: ItemCategory,
    pub photo_url: String,
    pub store_id: Option<StoreId>,
}

impl GroceryItemForm {
    /// Pre-populate the form from an existing item for editing.
    #[must_use]
    pub fn from_item(item: &GroceryItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            category: item.category.as_str().to_owned(),
            photo_url: item.photo_url.clone(),
            store_id: item.store_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// Run every field rule.
    ///
    /// `stores` is the same list that populated the store select; a non-empty
    /// `store_id` must name one of them.
    ///
    /// # Errors
    ///
    /// Returns the collected field messages if any rule failed.
    pub fn validate(&self, stores: &[GroceryStore]) -> Result<ValidItemFields, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.is_empty() {
            errors.add("name", "Item name is required.");
        }

        let price = if self.price.is_empty() {
            errors.add("price", "Price is required.");
            None
        } else {
            match Decimal::from_str(&self.price) {
                Ok(price) => Some(price),
                Err(_) => {
                    errors.add("price", "Price must be a number.");
                    None
                }
            }
        };

        let category = if self.category.is_empty() {
            errors.add("category", "Category is required.");
            None
        } else {
            match ItemCategory::from_str(&self.category) {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.add("category", "Choose a valid category.");
                    None
                }
            }
        };

        if self.photo_url.is_empty() {
            errors.add("photo_url", "Photo URL is required.");
        }

        // Option<Option<StoreId>>: outer None means the value was invalid.
        let store_id = if self.store_id.is_empty() {
            Some(None)
        } else {
            match self.store_id.parse::<i64>() {
                Ok(raw) => {
                    let id = StoreId::new(raw);
                    if stores.iter().any(|s| s.id == id) {
                        Some(Some(id))
                    } else {
                        errors.add("store_id", "Choose a valid store.");
                        None
                    }
                }
                Err(_) => {
                    errors.add("store_id", "Choose a valid store.");
                    None
                }
            }
        };

        match (price, category, store_id) {
            (Some(price), Some(category), Some(store_id)) if errors.is_empty() => {
                Ok(ValidItemFields {
                    name: self.name.clone(),
                    price,
                    category,
                    photo_url: self.photo_url.clone(),
                    store_id,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use grocery_core::UserId;

    fn sample_store(id: i64) -> GroceryStore {
        GroceryStore {
            id: StoreId::new(id),
            title: "Corner Market".to_owned(),
            address: "1 Long Street Name".to_owned(),
            created_by: UserId::new(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn valid_form() -> GroceryItemForm {
        GroceryItemForm {
            name: "Sourdough".to_owned(),
            price: "4.99".to_owned(),
            category: "BAKERY".to_owned(),
            photo_url: "https://example.com/bread.jpg".to_owned(),
            store_id: String::new(),
        }
    }

    #[test]
    fn test_valid_without_store() {
        let fields = valid_form().validate(&[]).unwrap();
        assert_eq!(fields.name, "Sourdough");
        assert_eq!(fields.price, Decimal::from_str("4.99").unwrap());
        assert_eq!(fields.category, ItemCategory::Bakery);
        assert_eq!(fields.store_id, None);
    }

    #[test]
    fn test_valid_with_known_store() {
        let mut form = valid_form();
        form.store_id = "3".to_owned();
        let fields = form.validate(&[sample_store(3)]).unwrap();
        assert_eq!(fields.store_id, Some(StoreId::new(3)));
    }

    #[test]
    fn test_unknown_store_rejected() {
        let mut form = valid_form();
        form.store_id = "99".to_owned();
        let errors = form.validate(&[sample_store(3)]).unwrap_err();
        assert_eq!(errors.first("store_id"), Some("Choose a valid store."));
    }

    #[test]
    fn test_price_must_parse() {
        let mut form = valid_form();
        form.price = "four dollars".to_owned();
        let errors = form.validate(&[]).unwrap_err();
        assert_eq!(errors.first("price"), Some("Price must be a number."));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut form = valid_form();
        form.category = "CANDY".to_owned();
        let errors = form.validate(&[]).unwrap_err();
        assert_eq!(errors.first("category"), Some("Choose a valid category."));
    }

    #[test]
    fn test_all_rules_run_on_empty_submission() {
        let errors = GroceryItemForm::default().validate(&[]).unwrap_err();
        assert!(errors.first("name").is_some());
        assert!(errors.first("price").is_some());
        assert!(errors.first("category").is_some());
        assert!(errors.first("photo_url").is_some());
    }

    #[test]
    fn test_from_item_roundtrips_select_values() {
        let item = GroceryItem {
            id: grocery_core::ItemId::new(1),
            name: "Olives".to_owned(),
            price: Decimal::from_str("2.50").unwrap(),
            category: ItemCategory::Deli,
            photo_url: "https://example.com/olives.jpg".to_owned(),
            store_id: Some(StoreId::new(7)),
            created_by: UserId::new(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let form = GroceryItemForm::from_item(&item);
        assert_eq!(form.price, "2.50");
        assert_eq!(form.category, "DELI");
        assert_eq!(form.store_id, "7");
    }
}
