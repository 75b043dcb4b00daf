//! Token issuer: mints fresh claims and signs them.

use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::TokenError;

use super::clock::Clock;
use super::codec::TokenCodec;

/// Mints tokens for an authenticated identity.
///
/// Stateless apart from the injected clock; every call generates a
/// fresh `jti`, collision-resistant because it is a UUIDv4 and load-
/// bearing because refresh `jti`s become session primary keys.
#[derive(Clone)]
pub struct TokenIssuer {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(codec: TokenCodec, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Issue a token for `identity` valid for `ttl` from now.
    pub fn issue(&self, identity: &Identity, ttl: Duration) -> Result<IssuedToken, TokenError> {
        let claims = Claims::new(identity, self.clock.now(), ttl);
        let token = self.codec.encode(&claims)?;

        debug!(jti = %claims.jti, sub = claims.sub, "issued token");

        Ok(IssuedToken { token, claims })
    }
}
