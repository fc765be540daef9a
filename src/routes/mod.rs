pub mod artists;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod onboarding;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the page router
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        .route("/artists", get(artists::list_artists))
        .route("/artists/:id", get(artists::show_artist))
        // Accounts
        .route("/login", get(auth::login_form).post(auth::sign_in))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/logout", post(auth::sign_out))
        // Signed-in routes
        .route("/dashboard", get(dashboard::dashboard))
        .route("/onboarding/artist", get(onboarding::wizard))
        .route("/onboarding/artist/basic-info", post(onboarding::save_basic_info))
        .route("/onboarding/artist/details", post(onboarding::save_details))
        .route("/onboarding/artist/service", post(onboarding::add_service))
}
