//! Configuration for the token services.

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_HOURS};

const DEV_SECRET: &str = "development-secret-please-change-in-production";

/// Configuration shared by the codec, issuer, and verifier.
///
/// The secret is read-only after construction and must be identical
/// across every service instance that issues or verifies tokens.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret
    pub secret: String,
    /// JWT signing algorithm; any other algorithm is rejected at
    /// decode time
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in hours
    pub refresh_token_expiry_hours: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_hours: REFRESH_TOKEN_EXPIRY_HOURS,
        }
    }
}

impl TokenConfig {
    /// Create a configuration with the given secret and default
    /// lifetimes.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// `JWT_SECRET` is required in production; the development secret
    /// is used when it is absent. `JWT_ACCESS_TOKEN_EXPIRY_MINUTES`
    /// and `JWT_REFRESH_TOKEN_EXPIRY_HOURS` override the lifetimes.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.to_string());
        let access_token_expiry_minutes = std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(ACCESS_TOKEN_EXPIRY_MINUTES);
        let refresh_token_expiry_hours = std::env::var("JWT_REFRESH_TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(REFRESH_TOKEN_EXPIRY_HOURS);

        Self {
            secret,
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes,
            refresh_token_expiry_hours,
        }
    }

    /// Check if the default secret is still in place (security
    /// warning at startup).
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }

    /// Access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_minutes)
    }

    /// Refresh token lifetime.
    pub fn refresh_ttl(&self) -> Duration {
        Duration::hours(self.refresh_token_expiry_hours)
    }
}
