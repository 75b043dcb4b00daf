//! Token verifier: the single choke point for presented tokens.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::clock::Clock;
use super::codec::TokenCodec;

/// Validates a presented token's signature and expiry and returns the
/// embedded claims.
///
/// Expiry is checked against the clock at verification time over the
/// closed-open interval `[iat, exp)`: a token presented exactly at
/// its expiry is rejected.
#[derive(Clone)]
pub struct TokenVerifier {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
}

impl TokenVerifier {
    pub fn new(codec: TokenCodec, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Verify a token string and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.codec.decode(token).map_err(|e| {
            warn!(error = %e, "rejected presented token");
            e
        })?;

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verify a token carried in an `Authorization` header value.
    ///
    /// Accepts exactly `Bearer <token>`, scheme case-insensitive.
    pub fn verify_bearer_header(&self, header: &str) -> Result<Claims, TokenError> {
        let mut fields = header.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                self.verify(token)
            }
            _ => Err(TokenError::Malformed),
        }
    }
}
