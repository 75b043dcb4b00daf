//! # Libra Core
//!
//! Session and token lifecycle core for the Libra backend.
//! This crate contains the domain entities, lifecycle services,
//! repository interfaces, and error types behind token issuance,
//! verification, and refresh-session management. Transport facades
//! (HTTP/gRPC) and user storage live in sibling crates and talk to
//! this core through the `CredentialChecker` and `SessionRepository`
//! seams.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Identity, IssuedToken, Session};
pub use domain::value_objects::{LoginResponse, RenewedAccessToken};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::SessionRepository;
pub use services::{
    AuthService, Clock, CredentialChecker, SystemClock, TokenCodec, TokenConfig, TokenIssuer,
    TokenVerifier,
};
