use axum::{body::Body, http::Request, middleware, Router};
use std::sync::Arc;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::auth::{session_middleware, AuthProvider};
use crate::config::Settings;
use crate::middleware::{request_id_layer, RequestIdExt};
use crate::routes;
use crate::services::{Accounts, Directory, Onboarding};
use crate::store::Store;

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<dyn Store>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    pub fn new(settings: Settings, store: Arc<dyn Store>, auth: Arc<dyn AuthProvider>) -> Arc<Self> {
        Arc::new(Self {
            settings,
            store,
            auth,
        })
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self.store.as_ref(), self.auth.as_ref())
    }

    pub fn directory(&self) -> Directory<'_> {
        Directory::new(self.store.as_ref())
    }

    pub fn onboarding(&self) -> Onboarding<'_> {
        Onboarding::new(self.store.as_ref())
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    // Spans carry the request id set by the outer layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = request.headers().request_id().unwrap_or("-"),
            )
        })
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Request ID layers
    let (set_request_id, propagate_request_id) = request_id_layer();

    let body_limit = RequestBodyLimitLayer::new(state.settings.request_body_limit_bytes);

    Router::new()
        .merge(routes::router())
        // Middleware stack (applied bottom-up)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(body_limit)
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .with_state(state)
}
