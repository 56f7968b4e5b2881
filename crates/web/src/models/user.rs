//! User domain type.

use chrono::{DateTime, Utc};

use grocery_core::{UserId, Username};

/// A registered account.
///
/// The password hash lives only in the `users` table and on the auth
/// service's verification path - it is never part of the domain type.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique and matched case-sensitively.
    pub username: Username,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
