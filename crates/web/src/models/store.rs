//! Grocery store domain type.

use chrono::{DateTime, Utc};

use grocery_core::{StoreId, UserId};

/// A grocery store that stocks [`GroceryItem`](super::GroceryItem)s.
#[derive(Debug, Clone)]
pub struct GroceryStore {
    /// Unique store ID.
    pub id: StoreId,
    /// Store name, 2-30 characters.
    pub title: String,
    /// Street address, 10-60 characters.
    pub address: String,
    /// The user who created the store. Immutable after creation.
    pub created_by: UserId,
    /// When the store was created.
    pub created_at: DateTime<Utc>,
    /// When the store was last edited.
    pub updated_at: DateTime<Utc>,
}
