//! Credential checking seam supplied by the external user directory.

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainResult;

/// Collaborator contract for authenticating a username/password pair.
///
/// The user directory owns password storage and its hashing scheme;
/// this core only consumes the verdict. Implementations return
/// `AuthError::UserNotFound` for unknown usernames and
/// `AuthError::InvalidCredentials` on a mismatch.
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    async fn check(&self, username: &str, password: &str) -> DomainResult<Identity>;
}
