//! Grocery item domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use grocery_core::{ItemCategory, ItemId, StoreId, UserId};

/// A grocery item, optionally stocked by a store.
#[derive(Debug, Clone)]
pub struct GroceryItem {
    /// Unique item ID.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Price in dollars.
    pub price: Decimal,
    /// Store section the item belongs to.
    pub category: ItemCategory,
    /// URL of a product photo.
    pub photo_url: String,
    /// The store that stocks this item, if any.
    pub store_id: Option<StoreId>,
    /// The user who created the item. Immutable after creation.
    pub created_by: UserId,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last edited.
    pub updated_at: DateTime<Utc>,
}
