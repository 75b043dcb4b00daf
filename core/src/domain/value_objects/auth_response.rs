//! Authentication response value objects returned by the lifecycle
//! manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::IssuedToken;

/// Result of a successful login.
///
/// Carries both tokens, their expiries, and the session ID backing
/// the refresh token. Plain data, no transport framing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session identifier (= refresh token `jti`)
    pub session_id: Uuid,

    /// Short-lived JWT access token
    pub access_token: String,

    /// Access token expiration time
    pub access_token_expires_at: DateTime<Utc>,

    /// Long-lived JWT refresh token
    pub refresh_token: String,

    /// Refresh token expiration time
    pub refresh_token_expires_at: DateTime<Utc>,
}

impl LoginResponse {
    /// Builds the response from the two freshly issued tokens.
    pub fn new(session_id: Uuid, access: &IssuedToken, refresh: &IssuedToken) -> Self {
        Self {
            session_id,
            access_token: access.token.clone(),
            access_token_expires_at: access.claims.expires_at(),
            refresh_token: refresh.token.clone(),
            refresh_token_expires_at: refresh.claims.expires_at(),
        }
    }
}

/// Result of redeeming a refresh token: a new access token only.
/// The refresh token and its session are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewedAccessToken {
    /// Fresh JWT access token
    pub access_token: String,

    /// Access token expiration time
    pub access_token_expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for RenewedAccessToken {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token_expires_at: issued.claims.expires_at(),
            access_token: issued.token,
        }
    }
}
