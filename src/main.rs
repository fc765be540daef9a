use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use artune::{app, auth, config, db, logging, store};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting ArtUne"
    );

    // Create database pool
    let pool = db::create_pool(&settings).await?;
    if settings.run_migrations {
        db::run_migrations(&pool).await?;
    }

    // One HTTP client for every auth service call
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.auth_timeout_seconds))
        .build()
        .context("Failed to build HTTP client")?;

    // Create JWKS cache for JWT verification
    let jwks_cache = auth::JwksCache::new(
        http_client.clone(),
        settings.supabase_jwt_jwks_url.clone(),
        settings.supabase_jwt_issuer.clone(),
        settings.supabase_jwt_audience.clone(),
        settings.jwks_cache_ttl_seconds,
    );

    // Optionally warm the JWKS cache
    if let Err(e) = jwks_cache.warm_cache().await {
        tracing::warn!(error = %e, "Failed to warm JWKS cache - will fetch on first request");
    }

    let auth_provider = auth::SupabaseAuth::new(
        http_client,
        settings.supabase_url.clone(),
        settings.supabase_anon_key.clone(),
        jwks_cache,
    );

    // Create application state
    let state = app::AppState::new(
        settings.clone(),
        Arc::new(store::PgStore::new(pool)),
        Arc::new(auth_provider),
    );

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server_addr))?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
