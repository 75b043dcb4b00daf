//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::Identity;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (24 hours)
pub const REFRESH_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims structure for the JWT payload.
///
/// The `jti` claim doubles as the session primary key when the token
/// is a refresh token, so it must be unique per issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,

    /// Display name of the subject
    pub username: String,

    /// Email of the subject
    pub email: String,

    /// Whether the subject holds the admin flag
    pub is_admin: bool,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for `identity`, valid for `ttl` starting at `issued_at`.
    ///
    /// A fresh UUIDv4 is generated for the `jti` claim.
    pub fn new(identity: &Identity, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiry = issued_at + ttl;

        Self {
            sub: identity.id,
            username: identity.username.clone(),
            email: identity.email.clone(),
            is_admin: identity.is_admin,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the token ID from the claims.
    ///
    /// For refresh tokens this is the session primary key.
    pub fn token_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.jti)
    }

    /// The identity snapshot carried by these claims.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub,
            username: self.username.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }

    /// Issued-at as a UTC timestamp.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_else(Utc::now)
    }

    /// Expiry as a UTC timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks expiry against `now` over the closed-open interval
    /// `[iat, exp)`: a token inspected exactly at `exp` is expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// A freshly minted token together with the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed compact JWT string
    pub token: String,

    /// Claims embedded in the token
    pub claims: Claims,
}
