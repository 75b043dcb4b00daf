//! Session lifecycle management: login, refresh, revoke, logout.

pub mod credentials;
pub mod service;

pub use credentials::CredentialChecker;
pub use service::AuthService;

#[cfg(test)]
mod tests;
