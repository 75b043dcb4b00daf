//! PostgreSQL implementation of the SessionRepository trait.
//!
//! Persists refresh-token sessions in the `sessions` table. Revoke is
//! a single atomic `UPDATE`, so operations on one session ID are
//! serialized by the database and a committed revoke is observed by
//! every later read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use libra_core::domain::entities::session::Session;
use libra_core::errors::{AuthError, DomainError, DomainResult};
use libra_core::repositories::SessionRepository;

/// PostgreSQL-backed session store.
pub struct PgSessionRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &sqlx::postgres::PgRow) -> DomainResult<Session> {
        Ok(Session {
            id: row.try_get("id").map_err(Self::column_error)?,
            username: row.try_get("username").map_err(Self::column_error)?,
            user_email: row.try_get("user_email").map_err(Self::column_error)?,
            refresh_token: row.try_get("refresh_token").map_err(Self::column_error)?,
            is_revoked: row.try_get("is_revoked").map_err(Self::column_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(Self::column_error)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(Self::column_error)?,
        })
    }

    fn column_error(e: sqlx::Error) -> DomainError {
        DomainError::Persistence {
            message: format!("failed to read session column: {e}"),
        }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, session: Session) -> DomainResult<Session> {
        let query = r#"
            INSERT INTO sessions (
                id, username, user_email, refresh_token, is_revoked, created_at, expires_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(query)
            .bind(session.id)
            .bind(&session.username)
            .bind(&session.user_email)
            .bind(&session.refresh_token)
            .bind(session.is_revoked)
            .bind(session.created_at)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // A primary-key collision means a duplicate token ID;
                // never silently merge
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    tracing::error!(session_id = %session.id, "session id collision");
                    DomainError::Persistence {
                        message: format!("session {} already exists", session.id),
                    }
                } else {
                    DomainError::Persistence {
                        message: format!("failed to create session: {e}"),
                    }
                }
            })?;

        Ok(session)
    }

    async fn get(&self, id: Uuid) -> DomainResult<Session> {
        let query = r#"
            SELECT id, username, user_email, refresh_token, is_revoked, created_at, expires_at
            FROM sessions
            WHERE id = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Persistence {
                message: format!("failed to fetch session: {e}"),
            })?;

        match row {
            Some(row) => Self::row_to_session(&row),
            None => Err(AuthError::SessionNotFound.into()),
        }
    }

    async fn revoke(&self, id: Uuid) -> DomainResult<()> {
        // No is_revoked filter: re-revoking an already-revoked row is
        // a matched update, which keeps the operation idempotent
        let query = "UPDATE sessions SET is_revoked = TRUE WHERE id = $1";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Persistence {
                message: format!("failed to revoke session: {e}"),
            })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::SessionNotFound.into());
        }

        tracing::debug!(session_id = %id, "session marked revoked");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let query = "DELETE FROM sessions WHERE id = $1";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Persistence {
                message: format!("failed to delete session: {e}"),
            })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::SessionNotFound.into());
        }

        Ok(())
    }

    async fn delete_by_owner(&self, username: &str) -> DomainResult<()> {
        let query = "DELETE FROM sessions WHERE username = $1";

        let result = sqlx::query(query)
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Persistence {
                message: format!("failed to delete sessions for owner: {e}"),
            })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::SessionNotFound.into());
        }

        tracing::debug!(username, deleted = result.rows_affected(), "sessions deleted");
        Ok(())
    }
}
