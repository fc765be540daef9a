//! Supabase Auth (GoTrue) client

use async_trait::async_trait;
use reqwest::Response;
use url::Url;

use super::provider::{AuthProvider, AuthSession, SignUpOutcome};
use super::{Identity, JwksCache};
use crate::domain::auth::{
    SignupMetadata, SupabaseAuthResponse, SupabaseErrorResponse, SupabaseSignupRequest,
    SupabaseSignupResponse,
};
use crate::domain::Role;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct SupabaseAuth {
    http: reqwest::Client,
    base_url: Url,
    anon_key: String,
    jwks: JwksCache,
}

impl SupabaseAuth {
    /// `base_url` must end with a slash (see `config::normalize_base_url`).
    pub fn new(http: reqwest::Client, base_url: Url, anon_key: String, jwks: JwksCache) -> Self {
        Self {
            http,
            base_url,
            anon_key,
            jwks,
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::internal(format!("Invalid auth endpoint {}: {}", path, e)))
    }

    fn session_from(response: SupabaseAuthResponse) -> AppResult<AuthSession> {
        let identity = Identity::try_from(response.user).map_err(AppError::internal)?;

        Ok(AuthSession {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            identity,
        })
    }
}

/// Pull the human-readable message out of a failed response.
async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let error: SupabaseErrorResponse = response.json().await.unwrap_or_else(|_| {
        SupabaseErrorResponse {
            error: Some(fallback.to_string()),
            ..Default::default()
        }
    });
    let message = error.get_message();
    tracing::debug!(%status, error_code = ?error.error_code, %message, "Auth service rejected request");
    message
}

fn connect_error(e: reqwest::Error) -> AppError {
    AppError::internal(format!("Failed to connect to auth service: {}", e))
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn sign_up(&self, email: &str, password: &str, role: Role) -> AppResult<SignUpOutcome> {
        let request = SupabaseSignupRequest {
            email,
            password,
            data: SignupMetadata { role },
        };

        let response = self
            .http
            .post(self.endpoint("auth/v1/signup")?)
            .header("apikey", &self.anon_key)
            .json(&request)
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            return Err(AppError::bad_request(
                error_message(response, "Failed to create account").await,
            ));
        }

        // Body shape depends on whether email confirmation is enabled
        let body = response
            .text()
            .await
            .map_err(|e| AppError::internal(format!("Failed to read auth response: {}", e)))?;

        if let Ok(auth_response) = serde_json::from_str::<SupabaseAuthResponse>(&body) {
            return Ok(SignUpOutcome::SignedIn(Self::session_from(auth_response)?));
        }

        if let Ok(pending) = serde_json::from_str::<SupabaseSignupResponse>(&body) {
            tracing::info!(
                confirmation_sent = pending.confirmation_sent_at.is_some(),
                "Sign-up awaiting email confirmation"
            );
            let identity = Identity::try_from(crate::domain::auth::SupabaseUser {
                id: pending.id,
                email: pending.email,
                user_metadata: pending.user_metadata,
            })
            .map_err(AppError::internal)?;
            return Ok(SignUpOutcome::ConfirmationRequired(identity));
        }

        Err(AppError::internal("Failed to parse auth response: unexpected format"))
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let response = self
            .http
            .post(self.endpoint("auth/v1/token")?)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            return Err(AppError::unauthorized(
                error_message(response, "Invalid credentials").await,
            ));
        }

        let auth_response: SupabaseAuthResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Failed to parse auth response: {}", e)))?;

        Self::session_from(auth_response)
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<AuthSession> {
        let response = self
            .http
            .post(self.endpoint("auth/v1/token")?)
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            return Err(AppError::unauthorized(
                error_message(response, "Session expired").await,
            ));
        }

        let auth_response: SupabaseAuthResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Failed to parse auth response: {}", e)))?;

        Self::session_from(auth_response)
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let response = self
            .http
            .post(self.endpoint("auth/v1/logout")?)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            // An expired token is already signed out as far as we care
            tracing::warn!(status = %response.status(), "Auth service logout failed");
        }

        Ok(())
    }

    async fn identify(&self, access_token: &str) -> AppResult<Identity> {
        let claims = self.jwks.verify_token(access_token).await.map_err(|e| {
            tracing::debug!(error = %e, "JWT verification failed");
            AppError::unauthorized("Invalid or expired session")
        })?;

        Identity::from_claims(&claims).map_err(AppError::unauthorized)
    }

    async fn health_check(&self) -> bool {
        let Ok(url) = self.endpoint("auth/v1/health") else {
            return false;
        };

        match self.http.get(url).header("apikey", &self.anon_key).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "Auth service health check failed");
                false
            }
        }
    }
}
