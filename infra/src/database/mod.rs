//! Database module - PostgreSQL implementations using SQLx
//!
//! Provides connection pool management and the repository
//! implementation backing the session store.

pub mod connection;
pub mod postgres;

// Re-export commonly used types
pub use connection::{DatabaseConfig, DatabasePool};
pub use postgres::PgSessionRepository;
