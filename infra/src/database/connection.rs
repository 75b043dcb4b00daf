//! Database connection pool management
//!
//! Connection pooling with SQLx against PostgreSQL, configured from
//! the environment at process start.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use libra_core::errors::DomainError;

/// Connection settings supplied at process start.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum pool size
    pub max_connections: u32,
    /// Acquire timeout in seconds
    pub connect_timeout: u64,
}

impl DatabaseConfig {
    /// Read settings from `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`,
    /// and `DATABASE_CONNECT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/libra".to_string());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            url,
            max_connections,
            connect_timeout,
        }
    }
}

/// PostgreSQL connection pool wrapper.
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new connection pool.
    pub async fn new(config: DatabaseConfig) -> Result<Self, DomainError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .test_before_acquire(true)
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::Persistence {
                message: format!("failed to create database pool: {e}"),
            })?;

        Ok(Self { pool })
    }

    /// The underlying SQLx pool, for queries and transactions.
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify connectivity with a trivial query.
    pub async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Persistence {
                message: format!("database health check failed: {e}"),
            })?;
        Ok(())
    }
}
