//! Seam between the application and the external auth service

use async_trait::async_trait;

use super::Identity;
use crate::domain::Role;
use crate::error::AppResult;

/// Tokens issued for a signed-in identity
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub identity: Identity,
}

/// What the auth service did with a sign-up request
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// Account created and signed in
    SignedIn(AuthSession),
    /// Account created; the address must be confirmed before signing in
    ConfirmationRequired(Identity),
}

impl SignUpOutcome {
    pub fn identity(&self) -> &Identity {
        match self {
            Self::SignedIn(session) => &session.identity,
            Self::ConfirmationRequired(identity) => identity,
        }
    }
}

/// Operations ArtUne needs from an auth service.
///
/// Failures that should be shown to the user carry the service's message
/// (`AppError::BadRequest` / `AppError::Unauthorized`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str, role: Role) -> AppResult<SignUpOutcome>;

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// Revoke the session behind an access token
    async fn sign_out(&self, access_token: &str) -> AppResult<()>;

    /// Exchange a refresh token for a new session
    async fn refresh(&self, refresh_token: &str) -> AppResult<AuthSession>;

    /// Verify an access token and return its identity
    async fn identify(&self, access_token: &str) -> AppResult<Identity>;

    async fn health_check(&self) -> bool;
}
