//! Session lifecycle manager implementation.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::domain::entities::token::Claims;
use crate::domain::value_objects::{LoginResponse, RenewedAccessToken};
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::SessionRepository;
use crate::services::token::{
    Clock, SystemClock, TokenCodec, TokenConfig, TokenIssuer, TokenVerifier,
};

use super::credentials::CredentialChecker;

/// Orchestrates the session lifecycle across the issuer, verifier,
/// and session store.
///
/// Holds no mutable state of its own; all state lives behind the
/// `SessionRepository`. Verification failures are caller errors and
/// are never retried; persistence failures surface to the caller
/// as-is.
pub struct AuthService<C, S>
where
    C: CredentialChecker,
    S: SessionRepository,
{
    /// Credential checking collaborator (external user directory)
    credentials: Arc<C>,
    /// Durable session store
    sessions: Arc<S>,
    /// Token minting
    issuer: TokenIssuer,
    /// Token validation
    verifier: TokenVerifier,
    /// Token lifetimes and signing configuration
    config: TokenConfig,
}

impl<C, S> AuthService<C, S>
where
    C: CredentialChecker,
    S: SessionRepository,
{
    /// Create a lifecycle manager with the system clock.
    pub fn new(credentials: Arc<C>, sessions: Arc<S>, config: TokenConfig) -> Self {
        Self::with_clock(credentials, sessions, config, Arc::new(SystemClock))
    }

    /// Create a lifecycle manager with an injected clock.
    pub fn with_clock(
        credentials: Arc<C>,
        sessions: Arc<S>,
        config: TokenConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let codec = TokenCodec::new(&config);

        Self {
            credentials,
            sessions,
            issuer: TokenIssuer::new(codec.clone(), clock.clone()),
            verifier: TokenVerifier::new(codec, clock),
            config,
        }
    }

    /// Authenticate a credential, mint an access + refresh token
    /// pair, and persist the session backing the refresh token.
    ///
    /// The session ID is the refresh token's `jti`, so one live
    /// session exists per issued refresh token by construction.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginResponse> {
        let identity = self.credentials.check(username, password).await?;

        let access = self.issuer.issue(&identity, self.config.access_ttl())?;
        let refresh = self.issuer.issue(&identity, self.config.refresh_ttl())?;

        let session = Session::from_refresh_claims(&refresh.claims, &refresh.token)
            .map_err(|_| TokenError::InvalidClaims)?;
        let session = self.sessions.create(session).await?;

        info!(session_id = %session.id, user_id = identity.id, "session created");

        Ok(LoginResponse::new(session.id, &access, &refresh))
    }

    /// Redeem a refresh token for a fresh access token.
    ///
    /// The presented access token authenticates the caller; the
    /// refresh token is the credential being redeemed and names the
    /// session through its `jti`. The refresh token itself is not
    /// rotated; the session row is untouched.
    #[instrument(skip_all)]
    pub async fn refresh_access_token(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<RenewedAccessToken> {
        let caller = self.verifier.verify(access_token)?;
        let refresh_claims = self.verifier.verify(refresh_token)?;

        let session_id = refresh_claims
            .token_id()
            .map_err(|_| TokenError::InvalidClaims)?;
        let session = self.sessions.get(session_id).await?;

        self.check_ownership(&session, &caller, "refresh")?;

        if session.is_revoked {
            warn!(session_id = %session.id, "refresh attempted against revoked session");
            return Err(AuthError::SessionRevoked.into());
        }

        let issued = self.issuer.issue(&caller.identity(), self.config.access_ttl())?;

        Ok(issued.into())
    }

    /// Mark a session dead before its natural expiry (soft delete,
    /// the row remains for audit).
    ///
    /// Idempotent: revoking an already-revoked session succeeds.
    #[instrument(skip(self, access_token))]
    pub async fn revoke_token(&self, access_token: &str, session_id: Uuid) -> DomainResult<()> {
        let caller = self.verifier.verify(access_token)?;
        let session = self.sessions.get(session_id).await?;

        self.check_ownership(&session, &caller, "revoke")?;

        if session.is_revoked {
            return Ok(());
        }

        self.sessions.revoke(session_id).await?;
        info!(session_id = %session_id, "session revoked");

        Ok(())
    }

    /// Delete the caller's sessions outright (hard delete).
    #[instrument(skip_all)]
    pub async fn logout(&self, access_token: &str) -> DomainResult<()> {
        let caller = self.verifier.verify(access_token)?;

        self.sessions.delete_by_owner(&caller.username).await?;
        info!(user_id = caller.sub, "sessions deleted on logout");

        Ok(())
    }

    /// Standalone verification for resource services that only need
    /// to authenticate a caller without touching sessions.
    pub fn verify_bearer(&self, token: &str) -> DomainResult<Claims> {
        Ok(self.verifier.verify(token)?)
    }

    /// Like `verify_bearer`, taking the raw `Authorization` header.
    pub fn verify_bearer_header(&self, header: &str) -> DomainResult<Claims> {
        Ok(self.verifier.verify_bearer_header(header)?)
    }

    fn check_ownership(
        &self,
        session: &Session,
        caller: &Claims,
        operation: &str,
    ) -> DomainResult<()> {
        if !session.is_owned_by(&caller.username) {
            warn!(
                session_id = %session.id,
                caller_id = caller.sub,
                operation,
                "session ownership mismatch"
            );
            return Err(AuthError::Forbidden.into());
        }
        Ok(())
    }
}
