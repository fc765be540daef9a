//! Artist directory routes
//!
//! Read-only; both pages re-query on every request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::app::AppState;
use crate::auth::MaybeUser;
use crate::error::AppResult;
use crate::views;

/// GET /artists
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    MaybeUser(user): MaybeUser,
) -> AppResult<Html<String>> {
    let artists = state.directory().artists().await?;
    tracing::debug!(count = artists.len(), "Listed artists");

    Ok(views::artists::directory_page(user.as_ref(), &artists))
}

/// GET /artists/:id
///
/// Unknown and malformed ids both get the not-found page.
pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let response = match state.directory().artist_page(&id).await? {
        Some(page) => views::artists::detail_page(user.as_ref(), &page).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            views::artists::not_found_page(user.as_ref()),
        )
            .into_response(),
    };

    Ok(response)
}
