//! Session repository trait defining the interface for refresh-token
//! session persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainResult;

/// Repository trait for `Session` entity persistence operations.
///
/// The store is the single owner of session rows; no other component
/// mutates them directly. Implementations must serialize operations
/// on the same session ID (row-level locking or equivalent) so that a
/// committed revoke is observed by any later `get` — last-writer-wins
/// on the revoked flag is unacceptable.
///
/// # Security Considerations
/// - `create` must never silently overwrite an existing row: a
///   session-ID collision is a fatal persistence error.
/// - The revoked flag, once set, never reverts.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session row.
    ///
    /// # Returns
    /// * `Ok(Session)` - The stored session
    /// * `Err(DomainError::Persistence)` - Write failed, including the
    ///   duplicate-session-ID case
    async fn create(&self, session: Session) -> DomainResult<Session>;

    /// Fetch a session by its ID.
    ///
    /// # Returns
    /// * `Ok(Session)` - Session found (revoked rows are still
    ///   queryable)
    /// * `Err(AuthError::SessionNotFound)` - No row with this ID
    async fn get(&self, id: Uuid) -> DomainResult<Session>;

    /// Set the revoked flag on a session (soft delete, row remains
    /// for audit).
    ///
    /// Idempotent: revoking an already-revoked session succeeds.
    ///
    /// # Returns
    /// * `Ok(())` - Flag set (or already set)
    /// * `Err(AuthError::SessionNotFound)` - No row with this ID
    async fn revoke(&self, id: Uuid) -> DomainResult<()>;

    /// Hard-delete a session row. Used at logout.
    ///
    /// # Returns
    /// * `Ok(())` - Row deleted
    /// * `Err(AuthError::SessionNotFound)` - No row with this ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Hard-delete every session owned by `username`. Logout path
    /// when only the access token, and so only the identity, is at
    /// hand.
    ///
    /// # Returns
    /// * `Ok(())` - At least one row deleted
    /// * `Err(AuthError::SessionNotFound)` - The owner holds no
    ///   sessions
    async fn delete_by_owner(&self, username: &str) -> DomainResult<()>;
}
