//! Session middleware configuration.
//!
//! Sets up `SQLite`-backed sessions using tower-sessions.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::AppConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "grocery_session";

/// Session expiry time in seconds (30 days of inactivity).
///
/// "Remember me" semantics: the cookie outlives individual browsing sessions.
const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Create the session layer over a `SQLite` store.
///
/// The store's table must already exist - run `SqliteStore::migrate` first.
#[must_use]
pub fn create_session_layer(
    store: SqliteStore,
    config: &AppConfig,
) -> SessionManagerLayer<SqliteStore> {
    // Only mark the cookie Secure when actually served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
