use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use super::{session, AuthSession, CurrentUser, Identity};
use crate::app::AppState;
use crate::error::AppError;

/// Verified session, placed in request extensions by [`session_middleware`]
#[derive(Debug, Clone)]
struct Session {
    identity: Identity,
    access_token: String,
}

impl From<&AuthSession> for Session {
    fn from(fresh: &AuthSession) -> Self {
        Self {
            identity: fresh.identity.clone(),
            access_token: fresh.access_token.clone(),
        }
    }
}

enum Authentication {
    Anonymous,
    Valid(Session),
    Refreshed(AuthSession),
    /// Cookies present but no longer usable
    Ended,
}

async fn authenticate(state: &AppState, jar: &CookieJar) -> Authentication {
    let access_token = session::access_token(jar);

    if let Some(token) = access_token {
        match state.auth.identify(token).await {
            Ok(identity) => {
                return Authentication::Valid(Session {
                    identity,
                    access_token: token.to_string(),
                })
            }
            Err(e) => tracing::debug!(error = %e, "Access token rejected"),
        }
    }

    let Some(refresh_token) = session::refresh_token(jar) else {
        return match access_token {
            Some(_) => {
                tracing::warn!("Ignoring invalid session cookie");
                Authentication::Ended
            }
            None => Authentication::Anonymous,
        };
    };

    match state.auth.refresh(refresh_token).await {
        Ok(fresh) => Authentication::Refreshed(fresh),
        Err(e) => {
            tracing::warn!(error = %e, "Session refresh failed");
            Authentication::Ended
        }
    }
}

/// Verify the session cookie once per request, refreshing an expired
/// access token when a refresh token is available.
///
/// New or cleared cookies are added to the response unless the handler
/// set the session cookies itself (sign-in, sign-out).
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let authentication = authenticate(&state, &jar).await;
    let cookies = match authentication {
        Authentication::Anonymous => None,
        Authentication::Valid(session) => {
            request.extensions_mut().insert(session);
            None
        }
        Authentication::Refreshed(fresh) => {
            tracing::info!(user_id = %fresh.identity.user_id, "Session refreshed");
            request.extensions_mut().insert(Session::from(&fresh));
            Some(session::start(
                CookieJar::new(),
                &fresh,
                state.settings.session_cookie_secure,
            ))
        }
        Authentication::Ended => Some(session::end(jar)),
    };

    let response = next.run(request).await;
    match cookies {
        Some(cookies) if !session::is_set_by(response.headers()) => {
            (cookies, response).into_response()
        }
        _ => response,
    }
}

/// Extractor for pages that render for visitors and users alike
///
/// ```ignore
/// async fn home(MaybeUser(user): MaybeUser) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

/// Extractor for pages that need a signed-in user. Visitors are sent to
/// the login page.
#[derive(Debug, Clone)]
pub struct RequireUser(pub CurrentUser);

impl std::ops::Deref for RequireUser {
    type Target = CurrentUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection for [`MaybeUser`] and [`RequireUser`]
#[derive(Debug)]
pub enum UserRejection {
    /// No valid session
    Login,
    /// The session is valid but its profile row could not be loaded.
    /// `user` is built from the session alone and is only fit for display.
    Unavailable { user: CurrentUser, error: AppError },
}

impl IntoResponse for UserRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Login => Redirect::to("/login").into_response(),
            Self::Unavailable { error, .. } => error.into_response(),
        }
    }
}

async fn resolve(parts: &Parts, state: &AppState) -> Result<Option<CurrentUser>, UserRejection> {
    let Some(session) = parts.extensions.get::<Session>() else {
        return Ok(None);
    };
    let identity = session.identity.clone();

    match state.store.find_user_profile(identity.user_id).await {
        Ok(profile) => Ok(Some(CurrentUser::merge(
            identity,
            profile,
            &session.access_token,
        ))),
        Err(error) => {
            tracing::warn!(user_id = %identity.user_id, error = %error, "Failed to load profile for session");
            Err(UserRejection::Unavailable {
                user: CurrentUser::merge(identity, None, &session.access_token),
                error,
            })
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for MaybeUser {
    type Rejection = UserRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await.map(MaybeUser)
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequireUser {
    type Rejection = UserRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, state)
            .await?
            .map(RequireUser)
            .ok_or(UserRejection::Login)
    }
}
