//! Sign-up, sign-in and sign-out

use crate::auth::{AuthProvider, AuthSession, CurrentUser, Identity, SignUpOutcome};
use crate::domain::auth::{SignInForm, ValidRegistration};
use crate::domain::{NewUserProfile, Role};
use crate::error::AppResult;
use crate::store::Store;

pub struct Accounts<'a> {
    store: &'a dyn Store,
    auth: &'a dyn AuthProvider,
}

impl<'a> Accounts<'a> {
    pub fn new(store: &'a dyn Store, auth: &'a dyn AuthProvider) -> Self {
        Self { store, auth }
    }

    /// Create the auth identity, then its profile row with the chosen role.
    ///
    /// If the profile write fails the identity still exists; the error is
    /// returned and the next sign-in creates the row.
    pub async fn sign_up(&self, registration: &ValidRegistration) -> AppResult<SignUpOutcome> {
        let outcome = self
            .auth
            .sign_up(&registration.email, &registration.password, registration.role)
            .await?;

        let identity = outcome.identity();
        let profile = new_profile(identity, &registration.email, registration.role);

        self.store.ensure_user_profile(&profile).await.map_err(|e| {
            tracing::error!(
                user_id = %identity.user_id,
                error = %e,
                "Auth identity created but profile row was not"
            );
            e
        })?;

        tracing::info!(user_id = %identity.user_id, role = %registration.role, "Account created");
        Ok(outcome)
    }

    pub async fn sign_in(&self, form: &SignInForm) -> AppResult<AuthSession> {
        let email = form.email.trim();
        let session = self.auth.sign_in(email, &form.password).await?;

        // Heal accounts whose profile row was never written at sign-up
        let role = session
            .identity
            .role
            .filter(Role::is_self_service)
            .unwrap_or_default();
        let profile = new_profile(&session.identity, email, role);
        if let Err(e) = self.store.ensure_user_profile(&profile).await {
            tracing::warn!(user_id = %session.identity.user_id, error = %e, "Failed to ensure profile row");
        }

        tracing::info!(user_id = %session.identity.user_id, "Signed in");
        Ok(session)
    }

    /// Revoke the remote session. Failures are logged; the caller clears
    /// the cookies either way.
    pub async fn sign_out(&self, user: &CurrentUser) {
        match self.auth.sign_out(user.access_token()).await {
            Ok(()) => tracing::info!(user_id = %user.id, "Signed out"),
            Err(e) => tracing::warn!(user_id = %user.id, error = %e, "Remote sign-out failed"),
        }
    }
}

fn new_profile(identity: &Identity, fallback_email: &str, role: Role) -> NewUserProfile {
    NewUserProfile {
        id: identity.user_id,
        email: identity
            .email
            .clone()
            .unwrap_or_else(|| fallback_email.to_string()),
        role,
    }
}
