//! CLI subcommands.

pub mod migrate;
pub mod seed;

use thiserror::Error;

use grocery_web::config::ConfigError;
use grocery_web::db::RepositoryError;
use grocery_web::services::auth::AuthError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}
