//! CLI subcommands and their shared error type.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use thiserror::Error;

use coffee_shop_server::db::StoreError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Store operation failed while seeding.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Menu file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Menu file is not valid YAML for a menu.
    #[error("Invalid menu file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Menu file parsed but failed validation.
    #[error("{0} validation errors found")]
    Invalid(usize),
}

/// Database URL from `SHOP_DATABASE_URL`, falling back to `DATABASE_URL`.
fn database_url() -> Result<SecretString, CliError> {
    dotenvy::dotenv().ok();

    std::env::var("SHOP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("SHOP_DATABASE_URL"))
}
