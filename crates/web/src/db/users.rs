//! User repository for database operations.
//!
//! Covers accounts, credential lookup for the auth service, and the
//! per-user shopping list association.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use grocery_core::{ItemId, UserId, Username};

use super::RepositoryError;
use super::items::{ITEM_COLUMNS, ItemRow, map_item_row};
use crate::models::{GroceryItem, User};

/// Database row for a user (without the password hash).
#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    username: Username,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password_hash, created_at) \
             VALUES (?1, ?2, ?3) \
             RETURNING id, username, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Get a user by their username (case-sensitive exact match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Get a user and their password hash by username.
    ///
    /// Returns `None` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct CredentialRow {
            id: UserId,
            username: Username,
            created_at: DateTime<Utc>,
            password_hash: String,
        }

        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, username, created_at, password_hash FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                User {
                    id: r.id,
                    username: r.username,
                    created_at: r.created_at,
                },
                r.password_hash,
            )
        }))
    }

    /// Append an item to a user's shopping list.
    ///
    /// Duplicates are permitted: adding the same item twice records it twice.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// foreign key violation for a nonexistent user or item).
    pub async fn add_shopping_list_item(
        &self,
        user_id: UserId,
        item_id: ItemId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO shopping_list_items (user_id, item_id, added_at) VALUES (?1, ?2, ?3)",
        )
        .bind(user_id)
        .bind(item_id)
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List a user's shopping-list items in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if an item row fails to parse.
    pub async fn shopping_list(&self, user_id: UserId) -> Result<Vec<GroceryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM shopping_list_items sl \
             JOIN items i ON i.id = sl.item_id \
             WHERE sl.user_id = ?1 \
             ORDER BY sl.id ASC",
            item_columns_qualified()
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(map_item_row).collect()
    }
}

/// `ITEM_COLUMNS` qualified with the `i` alias for the shopping-list join.
fn item_columns_qualified() -> String {
    ITEM_COLUMNS
        .split(", ")
        .map(|c| format!("i.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}
