//! Authentication domain types
//!
//! Form payloads from the login/register pages and the Supabase Auth wire
//! types they are exchanged for.

use serde::{Deserialize, Serialize};

use super::profiles::Role;
use crate::error::{AppError, AppResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Login form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register form (details step)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Registration input that passed client-side checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    /// Checks run before anything is sent to the auth service, in the
    /// order the register page reports them.
    pub fn validate(&self) -> AppResult<ValidRegistration> {
        if self.password != self.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        let role = self
            .role
            .as_deref()
            .and_then(Role::parse)
            .filter(Role::is_self_service)
            .ok_or_else(|| AppError::validation("Please select a role"))?;

        Ok(ValidRegistration {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role,
        })
    }
}

// Supabase Auth API response types

/// Response carrying tokens (sign-in, or sign-up without email confirmation)
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseAuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: SupabaseUser,
}

/// Sign-up response when email confirmation is required: the user object
/// without tokens
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSignupResponse {
    pub id: String,
    pub email: Option<String>,
    pub confirmation_sent_at: Option<String>,
    pub user_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseUser {
    pub id: String,
    pub email: Option<String>,
    pub user_metadata: Option<serde_json::Value>,
}

/// Error body; newer deployments use `msg`/`error_code`, older ones
/// `error`/`error_description`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseErrorResponse {
    pub code: Option<i32>,
    pub error_code: Option<String>,
    pub msg: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub message: Option<String>,
}

impl SupabaseErrorResponse {
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown authentication error".to_string())
    }
}

/// Request body for `POST /auth/v1/signup`
#[derive(Debug, Serialize)]
pub struct SupabaseSignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignupMetadata,
}

#[derive(Debug, Serialize)]
pub struct SignupMetadata {
    pub role: Role,
}

/// Role stored in an identity's user metadata, if any
pub fn metadata_role(user_metadata: Option<&serde_json::Value>) -> Option<Role> {
    user_metadata
        .and_then(|m| m.get("role"))
        .and_then(|v| v.as_str())
        .and_then(Role::parse)
}
