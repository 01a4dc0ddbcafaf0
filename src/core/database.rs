use crate::core::config::DatabaseConfig;
use sqlx::{error::ErrorKind, postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Error surfaced by the data-access layer.
///
/// Constraint failures are classified so services can turn them into
/// client-facing messages without knowing PostgreSQL error codes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unique constraint violated on field '{field}'")]
    UniqueViolation { field: String },

    #[error("Foreign key constraint '{constraint}' violated")]
    ForeignKeyViolation { constraint: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            let constraint = db_err.constraint().unwrap_or_default();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return StoreError::UniqueViolation {
                        field: unique_field(db_err.table(), constraint),
                    };
                }
                ErrorKind::ForeignKeyViolation => {
                    return StoreError::ForeignKeyViolation {
                        constraint: constraint.to_string(),
                    };
                }
                _ => {}
            }
        }

        StoreError::Database(e)
    }
}

/// Recover the column name from a PostgreSQL unique constraint name.
///
/// Follows the default `<table>_<column>_key` naming used by the migrations.
pub fn unique_field(table: Option<&str>, constraint: &str) -> String {
    let without_suffix = constraint.strip_suffix("_key").unwrap_or(constraint);
    table
        .and_then(|t| without_suffix.strip_prefix(t))
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(without_suffix)
        .to_string()
}
