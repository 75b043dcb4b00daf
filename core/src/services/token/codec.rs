//! Signed-claims codec: serialization of `Claims` into compact JWTs
//! and back.
//!
//! Decode validates structure and signature only; expiry belongs to
//! the verifier so the codec stays pure.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenConfig;

/// Tamper-evident codec pinned to a single signing algorithm.
///
/// A token whose header names any other algorithm is rejected with
/// `UnexpectedAlgorithm` before its signature is even considered,
/// which closes the algorithm-substitution hole.
#[derive(Clone)]
pub struct TokenCodec {
    algorithm: jsonwebtoken::Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        // Expiry is the verifier's job, not the codec's
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            algorithm: config.algorithm,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Serialize and sign claims into a compact token string.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|_| TokenError::IssuanceFailed)
    }

    /// Parse a token string back into claims, rejecting bad
    /// signatures, malformed structure, and wrong algorithms.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    TokenError::InvalidSignature
                }
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName => {
                    TokenError::UnexpectedAlgorithm
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        Ok(token_data.claims)
    }
}
