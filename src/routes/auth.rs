//! Login, registration and logout routes
//!
//! Failures re-render the form with one inline message and the submitted
//! email; passwords are never echoed back.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

use crate::app::AppState;
use crate::auth::{session, MaybeUser, SignUpOutcome, UserRejection};
use crate::domain::auth::{RegisterForm, SignInForm};
use crate::domain::Role;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct RegisterQuery {
    pub role: Option<String>,
}

fn chosen_role(raw: Option<&str>) -> Option<Role> {
    raw.and_then(Role::parse).filter(Role::is_self_service)
}

/// Where a new account lands after signing up
fn landing_page(role: Role) -> &'static str {
    match role {
        Role::Artist => "/onboarding/artist",
        _ => "/dashboard",
    }
}

/// GET /login
pub async fn login_form() -> Html<String> {
    views::auth::login_page("", None)
}

/// POST /login
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Response {
    match state.accounts().sign_in(&form).await {
        Ok(session) => {
            let jar = session::start(jar, &session, state.settings.session_cookie_secure);
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            e.log();
            let message = e.inline_message("Failed to sign in");
            (
                e.status_code(),
                views::auth::login_page(&form.email, Some(&message)),
            )
                .into_response()
        }
    }
}

/// GET /register and GET /register?role=artist|client
pub async fn register_form(Query(query): Query<RegisterQuery>) -> Html<String> {
    match chosen_role(query.role.as_deref()) {
        Some(role) => views::auth::register_details_page(role, "", None),
        None => views::auth::register_role_page(None),
    }
}

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let rerender = |message: &str| match chosen_role(form.role.as_deref()) {
        Some(role) => views::auth::register_details_page(role, form.email.trim(), Some(message)),
        None => views::auth::register_role_page(Some(message)),
    };

    // Checked locally; nothing reaches the auth service on failure
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(e) => {
            e.log();
            return (e.status_code(), rerender(&e.public_message())).into_response();
        }
    };

    match state.accounts().sign_up(&registration).await {
        Ok(SignUpOutcome::SignedIn(session)) => {
            let jar = session::start(jar, &session, state.settings.session_cookie_secure);
            (jar, Redirect::to(landing_page(registration.role))).into_response()
        }
        Ok(SignUpOutcome::ConfirmationRequired(_)) => {
            views::auth::check_email_page(&registration.email).into_response()
        }
        Err(e) => {
            e.log();
            let message = e.inline_message("Failed to create account");
            (e.status_code(), rerender(&message)).into_response()
        }
    }
}

/// POST /logout
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    user: Result<MaybeUser, UserRejection>,
    jar: CookieJar,
) -> impl IntoResponse {
    // A missing profile row does not stop the session from ending
    let user = match user {
        Ok(MaybeUser(user)) => user,
        Err(UserRejection::Unavailable { user, .. }) => Some(user),
        Err(UserRejection::Login) => None,
    };

    if let Some(user) = user {
        state.accounts().sign_out(&user).await;
    }

    (session::end(jar), Redirect::to("/"))
}
