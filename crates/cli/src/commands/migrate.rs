//! Database migration command.
//!
//! Runs the embedded app migrations plus the session store's own table
//! setup against the configured database.

use tower_sessions_sqlx_store::SqliteStore;

use grocery_web::config::AppConfig;
use grocery_web::db;

use super::CliError;

/// Bring the database schema up to date.
///
/// # Errors
///
/// Returns `CliError` if the database cannot be reached or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let config = AppConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;
    SqliteStore::new(pool.clone()).migrate().await?;

    tracing::info!("Migrations complete");
    Ok(())
}
