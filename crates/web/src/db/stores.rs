//! Store repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use grocery_core::{StoreId, UserId};

use super::RepositoryError;
use crate::models::GroceryStore;

/// Database row for a store.
#[derive(sqlx::FromRow)]
struct StoreRow {
    id: StoreId,
    title: String,
    address: String,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StoreRow> for GroceryStore {
    fn from(row: StoreRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            address: row.address,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const STORE_COLUMNS: &str = "id, title, address, created_by, created_at, updated_at";

/// Repository for grocery store database operations.
pub struct StoreRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new store owned by `created_by`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        title: &str,
        address: &str,
        created_by: UserId,
    ) -> Result<GroceryStore, RepositoryError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, StoreRow>(
            "INSERT INTO stores (title, address, created_by, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?4) \
             RETURNING id, title, address, created_by, created_at, updated_at",
        )
        .bind(title)
        .bind(address)
        .bind(created_by)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get a store by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: StoreId) -> Result<Option<GroceryStore>, RepositoryError> {
        let row = sqlx::query_as::<_, StoreRow>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List all stores, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<GroceryStore>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoreRow>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores ORDER BY id ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List the stores created by a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_creator(
        &self,
        user_id: UserId,
    ) -> Result<Vec<GroceryStore>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoreRow>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE created_by = ?1 ORDER BY id ASC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a store's editable fields.
    ///
    /// The creator is deliberately never touched by this statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: StoreId,
        title: &str,
        address: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE stores SET title = ?1, address = ?2, updated_at = ?3 WHERE id = ?4",
        )
        .bind(title)
        .bind(address)
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
