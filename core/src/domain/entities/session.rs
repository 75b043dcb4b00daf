//! Session entity backing issued refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token::Claims;

/// Persisted record for an issued refresh token.
///
/// Created at login, soft-deleted (`is_revoked`) on revocation so the
/// row survives for audit, and hard-deleted on logout. The session ID
/// is the refresh token's `jti` claim, never a separately generated
/// key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (= refresh token `jti`)
    pub id: Uuid,

    /// Username of the owning identity
    pub username: String,

    /// Email of the owning identity
    pub user_email: String,

    /// The refresh token string this session backs
    pub refresh_token: String,

    /// Whether the session has been revoked
    pub is_revoked: bool,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the backing refresh token expires
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Builds a session from the claims of a freshly issued refresh
    /// token.
    ///
    /// Fails only when the `jti` claim is not a UUID, which signals a
    /// token this core never issued.
    pub fn from_refresh_claims(claims: &Claims, refresh_token: impl Into<String>) -> Result<Self, uuid::Error> {
        Ok(Self {
            id: claims.token_id()?,
            username: claims.username.clone(),
            user_email: claims.email.clone(),
            refresh_token: refresh_token.into(),
            is_revoked: false,
            created_at: claims.issued_at(),
            expires_at: claims.expires_at(),
        })
    }

    /// Marks the session revoked. Monotonic: there is no inverse.
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }

    /// Whether the session is owned by the named identity.
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.username == username
    }
}
