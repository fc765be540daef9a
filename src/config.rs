use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::logging::LogFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,
    pub log_format: LogFormat,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,

    // Supabase Auth
    pub supabase_url: Url,
    pub supabase_anon_key: String,
    pub supabase_jwt_jwks_url: String,
    pub supabase_jwt_issuer: String,
    pub supabase_jwt_audience: String,
    pub jwks_cache_ttl_seconds: u64,
    pub auth_timeout_seconds: u64,

    // HTTP
    pub session_cookie_secure: bool,
    pub request_body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_format = env::var("LOG_FORMAT")
            .ok()
            .and_then(|s| LogFormat::parse(&s))
            .unwrap_or_else(|| LogFormat::default_for(&env));

        // Database
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS").unwrap_or(10);
        let run_migrations = parse_bool_var("RUN_MIGRATIONS").unwrap_or(true);

        // Supabase Auth
        let supabase_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let supabase_url = normalize_base_url(&supabase_url)?;
        let supabase_anon_key =
            env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;
        let supabase_jwt_jwks_url = env::var("SUPABASE_JWT_JWKS_URL")
            .unwrap_or_else(|_| format!("{}auth/v1/.well-known/jwks.json", supabase_url));
        let supabase_jwt_issuer = env::var("SUPABASE_JWT_ISSUER")
            .unwrap_or_else(|_| format!("{}auth/v1", supabase_url));
        let supabase_jwt_audience =
            env::var("SUPABASE_JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".to_string());
        let jwks_cache_ttl_seconds = parse_var("JWKS_CACHE_TTL_SECONDS").unwrap_or(1800); // 30 minutes
        let auth_timeout_seconds = parse_var("AUTH_TIMEOUT_SECONDS").unwrap_or(10);

        // HTTP
        let session_cookie_secure =
            parse_bool_var("SESSION_COOKIE_SECURE").unwrap_or_else(|| env.is_prod());
        let request_body_limit_bytes = parse_var("REQUEST_BODY_LIMIT_BYTES").unwrap_or(64 * 1024);

        Ok(Settings {
            env,
            server_addr,
            log_format,
            database_url,
            database_max_connections,
            run_migrations,
            supabase_url,
            supabase_anon_key,
            supabase_jwt_jwks_url,
            supabase_jwt_issuer,
            supabase_jwt_audience,
            jwks_cache_ttl_seconds,
            auth_timeout_seconds,
            session_cookie_secure,
            request_body_limit_bytes,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_bool_var(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|s| parse_bool(&s))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses a base URL and guarantees a trailing slash so `Url::join` appends
/// instead of replacing the last path segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).with_context(|| format!("Invalid URL: {}", raw))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
