//! # Infrastructure Layer
//!
//! Concrete persistence for the Libra auth core: the PostgreSQL
//! session store behind `libra_core::repositories::SessionRepository`,
//! plus connection pool management. The schema lives in
//! `migrations/`.

// Re-export core types for convenience
pub use libra_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

pub use database::{DatabaseConfig, DatabasePool, PgSessionRepository};
