//! Lifecycle manager tests covering login, refresh, revoke, and
//! logout flows.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::identity::Identity;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockSessionRepository, SessionRepository};
use crate::services::auth::service::AuthService;
use crate::services::token::clock::{Clock, ManualClock};
use crate::services::token::config::TokenConfig;

use super::mocks::{FailingSessionRepository, MockCredentialChecker};

struct Harness {
    service: AuthService<MockCredentialChecker, MockSessionRepository>,
    sessions: Arc<MockSessionRepository>,
    clock: Arc<ManualClock>,
}

fn harness() -> Harness {
    let credentials = MockCredentialChecker::new()
        .with_user(Identity::new(1, "alice", "alice@example.com", false), "correct-horse")
        .with_user(Identity::new(2, "bob", "bob@example.com", true), "hunter2");

    let sessions = Arc::new(MockSessionRepository::new());
    let clock = Arc::new(ManualClock::new(Utc::now()));

    Harness {
        service: AuthService::with_clock(
            Arc::new(credentials),
            sessions.clone(),
            TokenConfig::default(),
            clock.clone(),
        ),
        sessions,
        clock,
    }
}

#[tokio::test]
async fn test_login_issues_tokens_and_creates_session() {
    let h = harness();

    let response = h.service.login("alice", "correct-horse").await.unwrap();

    // Access token: 15 minutes, carries the identity
    let access_claims = h.service.verify_bearer(&response.access_token).unwrap();
    assert_eq!(access_claims.sub, 1);
    assert_eq!(access_claims.username, "alice");
    assert_eq!(access_claims.exp - access_claims.iat, 15 * 60);
    assert_eq!(response.access_token_expires_at, access_claims.expires_at());

    // Refresh token: 24 hours, its jti is the session ID
    let refresh_claims = h.service.verify_bearer(&response.refresh_token).unwrap();
    assert_eq!(refresh_claims.exp - refresh_claims.iat, 24 * 60 * 60);
    assert_eq!(refresh_claims.token_id().unwrap(), response.session_id);

    let session = h.sessions.get(response.session_id).await.unwrap();
    assert!(!session.is_revoked);
    assert_eq!(session.username, "alice");
    assert_eq!(session.refresh_token, response.refresh_token);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let h = harness();

    let result = h.service.login("alice", "wrong").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_with_unknown_user() {
    let h = harness();

    let result = h.service.login("mallory", "whatever").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::UserNotFound)
    ));
}

#[tokio::test]
async fn test_login_surfaces_persistence_failure() {
    let credentials = MockCredentialChecker::new()
        .with_user(Identity::new(1, "alice", "alice@example.com", false), "correct-horse");
    let service = AuthService::new(
        Arc::new(credentials),
        Arc::new(FailingSessionRepository),
        TokenConfig::default(),
    );

    let result = service.login("alice", "correct-horse").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Persistence { .. }
    ));
}

#[tokio::test]
async fn test_refresh_reissues_access_token_only() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();
    let before = h.sessions.get(login.session_id).await.unwrap();

    h.clock.advance(Duration::minutes(5));

    let renewed = h
        .service
        .refresh_access_token(&login.access_token, &login.refresh_token)
        .await
        .unwrap();

    // Fresh 15-minute expiry from the time of the refresh
    let claims = h.service.verify_bearer(&renewed.access_token).unwrap();
    assert_eq!(claims.sub, 1);
    assert_eq!(claims.exp, (h.clock.now() + Duration::minutes(15)).timestamp());
    assert!(renewed.access_token_expires_at > login.access_token_expires_at);

    // No rotation: the session row is untouched
    let after = h.sessions.get(login.session_id).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_refresh_with_expired_access_token() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    h.clock.advance(Duration::minutes(16));

    let result = h
        .service
        .refresh_access_token(&login.access_token, &login.refresh_token)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::Expired)
    ));
}

#[tokio::test]
async fn test_refresh_with_expired_refresh_token() {
    let h = harness();
    let old = h.service.login("alice", "correct-horse").await.unwrap();

    h.clock.advance(Duration::hours(25));

    // Fresh caller credential, stale refresh token
    let fresh = h.service.login("alice", "correct-horse").await.unwrap();
    let result = h
        .service
        .refresh_access_token(&fresh.access_token, &old.refresh_token)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::Expired)
    ));
}

#[tokio::test]
async fn test_refresh_against_foreign_session_is_forbidden() {
    let h = harness();
    let alice = h.service.login("alice", "correct-horse").await.unwrap();
    let bob = h.service.login("bob", "hunter2").await.unwrap();

    // Bob authenticates himself but redeems Alice's refresh token
    let result = h
        .service
        .refresh_access_token(&bob.access_token, &alice.refresh_token)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::Forbidden)
    ));
}

#[tokio::test]
async fn test_refresh_with_deleted_session() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    h.sessions.delete(login.session_id).await.unwrap();

    let result = h
        .service
        .refresh_access_token(&login.access_token, &login.refresh_token)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::SessionNotFound)
    ));
}

#[tokio::test]
async fn test_revoke_then_refresh() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    h.service
        .revoke_token(&login.access_token, login.session_id)
        .await
        .unwrap();

    // Soft delete: the row survives, flagged
    let session = h.sessions.get(login.session_id).await.unwrap();
    assert!(session.is_revoked);

    let result = h
        .service
        .refresh_access_token(&login.access_token, &login.refresh_token)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::SessionRevoked)
    ));
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    h.service
        .revoke_token(&login.access_token, login.session_id)
        .await
        .unwrap();

    // Revoking again is a no-op success
    h.service
        .revoke_token(&login.access_token, login.session_id)
        .await
        .unwrap();

    assert!(h.sessions.get(login.session_id).await.unwrap().is_revoked);
}

#[tokio::test]
async fn test_revoke_foreign_session_is_forbidden() {
    let h = harness();
    let alice = h.service.login("alice", "correct-horse").await.unwrap();
    let bob = h.service.login("bob", "hunter2").await.unwrap();

    let result = h
        .service
        .revoke_token(&bob.access_token, alice.session_id)
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::Forbidden)
    ));

    // Alice's session is untouched
    assert!(!h.sessions.get(alice.session_id).await.unwrap().is_revoked);
}

#[tokio::test]
async fn test_revoke_missing_session() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    let result = h
        .service
        .revoke_token(&login.access_token, Uuid::new_v4())
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::SessionNotFound)
    ));
}

#[tokio::test]
async fn test_logout_deletes_session() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    h.service.logout(&login.access_token).await.unwrap();

    let result = h.sessions.get(login.session_id).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::SessionNotFound)
    ));

    // A second logout finds nothing to delete
    let result = h.service.logout(&login.access_token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::SessionNotFound)
    ));
}

#[tokio::test]
async fn test_verify_bearer_rejects_tampered_token() {
    let h = harness();
    let login = h.service.login("alice", "correct-horse").await.unwrap();

    let token = &login.access_token;
    let mut tampered: String = token[..token.len() - 1].to_string();
    let last = token.chars().last().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let result = h.service.verify_bearer(&tampered);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidSignature)
    ));
}
