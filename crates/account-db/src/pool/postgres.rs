//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use account_common::config::DatabaseConfig;

/// Maximum time to wait for a connection from the pool
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum idle time before a connection is closed
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Maximum lifetime of a connection
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await
}

/// Create a connection pool from the DATABASE_URL environment variable
pub async fn create_pool_from_env() -> Result<PgPool, sqlx::Error> {
    let config = DatabaseConfig::from_env()
        .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;
    create_pool(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeouts() {
        assert_eq!(ACQUIRE_TIMEOUT, Duration::from_secs(10));
        assert!(IDLE_TIMEOUT < MAX_LIFETIME);
    }
}
