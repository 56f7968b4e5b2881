//! Authentication service.
//!
//! Password sign-up and login over the user repository.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;

use grocery_core::Username;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Authentication service.
///
/// Handles account creation and credential verification. Session
/// establishment is the login handler's job.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    pub async fn sign_up(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = Username::parse(username)?;

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(&username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Verify a username/password pair.
    ///
    /// An unknown username and a wrong password both come back as
    /// `InvalidCredentials`; the distinction is only logged, never shown.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair doesn't match.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let Some((user, password_hash)) = self.users.get_password_hash(username).await? else {
            tracing::debug!(username, "login attempt for unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_password("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret123", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("secret123").unwrap();
        assert!(matches!(
            verify_password("secret124", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Salted: two hashes of the same password must differ.
        let first = hash_password("secret123").unwrap();
        let second = hash_password("secret123").unwrap();
        assert_ne!(first, second);
    }
}
