//! Item repository for database operations.
//!
//! Prices are stored as decimal TEXT and categories as their stable
//! identifiers; rows that fail to parse surface as `DataCorruption`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use grocery_core::{ItemCategory, ItemId, StoreId, UserId};

use super::RepositoryError;
use crate::models::GroceryItem;

/// Database row for an item.
#[derive(sqlx::FromRow)]
pub(crate) struct ItemRow {
    id: ItemId,
    name: String,
    price: String,
    category: String,
    photo_url: String,
    store_id: Option<StoreId>,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Convert a database row into the domain type.
pub(crate) fn map_item_row(row: ItemRow) -> Result<GroceryItem, RepositoryError> {
    let price = Decimal::from_str(&row.price).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
    })?;
    let category = ItemCategory::from_str(&row.category)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid category in database: {e}")))?;

    Ok(GroceryItem {
        id: row.id,
        name: row.name,
        price,
        category,
        photo_url: row.photo_url,
        store_id: row.store_id,
        created_by: row.created_by,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub(crate) const ITEM_COLUMNS: &str =
    "id, name, price, category, photo_url, store_id, created_by, created_at, updated_at";

/// Validated field values for creating or updating an item.
#[derive(Debug, Clone)]
pub struct ItemFields<'a> {
    pub name: &'a str,
    pub price: Decimal,
    pub category: ItemCategory,
    pub photo_url: &'a str,
    pub store_id: Option<StoreId>,
}

/// Repository for grocery item database operations.
pub struct ItemRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new item owned by `created_by`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// foreign key violation for a nonexistent store).
    pub async fn create(
        &self,
        fields: &ItemFields<'_>,
        created_by: UserId,
    ) -> Result<GroceryItem, RepositoryError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, ItemRow>(
            "INSERT INTO items (name, price, category, photo_url, store_id, created_by, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) \
             RETURNING id, name, price, category, photo_url, store_id, created_by, created_at, updated_at",
        )
        .bind(fields.name)
        .bind(fields.price.to_string())
        .bind(fields.category.as_str())
        .bind(fields.photo_url)
        .bind(fields.store_id)
        .bind(created_by)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        map_item_row(row)
    }

    /// Get an item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the row fails to parse.
    pub async fn get_by_id(&self, id: ItemId) -> Result<Option<GroceryItem>, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(map_item_row).transpose()
    }

    /// List all items, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row fails to parse.
    pub async fn list_all(&self) -> Result<Vec<GroceryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY id ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(map_item_row).collect()
    }

    /// List the items stocked by a store, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row fails to parse.
    pub async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<GroceryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE store_id = ?1 ORDER BY id ASC"
        ))
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(map_item_row).collect()
    }

    /// List the items created by a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row fails to parse.
    pub async fn list_by_creator(&self, user_id: UserId) -> Result<Vec<GroceryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE created_by = ?1 ORDER BY id ASC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(map_item_row).collect()
    }

    /// Update an item's editable fields, including its store assignment.
    ///
    /// The creator is deliberately never touched by this statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: ItemId, fields: &ItemFields<'_>) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE items \
             SET name = ?1, price = ?2, category = ?3, photo_url = ?4, store_id = ?5, updated_at = ?6 \
             WHERE id = ?7",
        )
        .bind(fields.name)
        .bind(fields.price.to_string())
        .bind(fields.category.as_str())
        .bind(fields.photo_url)
        .bind(fields.store_id)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
