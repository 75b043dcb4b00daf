//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-level errors raised by the codec, issuer, and verifier.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token signed with an unexpected algorithm")]
    UnexpectedAlgorithm,

    #[error("Token expired")]
    Expired,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token issuance failed")]
    IssuanceFailed,
}

/// Authentication and session-layer errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Identity does not own the targeted session")]
    Forbidden,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Session is revoked")]
    SessionRevoked,
}

/// Core domain errors.
///
/// Sub-component errors pass through the lifecycle manager unchanged
/// in kind; operation context travels in tracing spans, not in the
/// error itself.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type DomainResult<T> = Result<T, DomainError>;
