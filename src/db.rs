//! Database connection pool management

use anyhow::{Context, Result};
use backoff::ExponentialBackoffBuilder;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Settings;

/// Give up connecting after this long
const CONNECT_MAX_ELAPSED: Duration = Duration::from_secs(60);

/// Create a PostgreSQL connection pool, retrying while the database comes up
pub async fn create_pool(settings: &Settings) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&settings.database_url)
        .context("Invalid DATABASE_URL")?
        .application_name("artune");

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(500))
        .with_max_interval(Duration::from_secs(10))
        .with_max_elapsed_time(Some(CONNECT_MAX_ELAPSED))
        .build();

    let pool = backoff::future::retry_notify(
        policy,
        || async {
            PgPoolOptions::new()
                .max_connections(settings.database_max_connections)
                .min_connections(1)
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .connect_with(connect_options.clone())
                .await
                .map_err(backoff::Error::transient)
        },
        |e: sqlx::Error, wait: Duration| {
            tracing::warn!(error = %e, retry_in_ms = wait.as_millis() as u64, "Database not reachable, retrying");
        },
    )
    .await
    .context("Failed to connect to PostgreSQL")?;

    tracing::info!(
        max_connections = settings.database_max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}

/// Lightweight health check for database connectivity
pub async fn health_check(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").fetch_one(pool).await.is_ok()
}
