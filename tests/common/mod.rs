//! Shared fixtures: in-memory store and auth service, and request helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use tower::ServiceExt;
use url::Url;
use uuid::Uuid;

use artune::app::{create_app, AppState};
use artune::auth::{AuthProvider, AuthSession, Identity, SignUpOutcome};
use artune::config::{Environment, Settings};
use artune::domain::{
    ArtistBasics, ArtistProfile, ArtistService, AvailabilityStatus, NewArtistService,
    NewUserProfile, ProfessionalDetails, Role, UserProfile,
};
use artune::error::{AppError, AppResult};
use artune::logging::LogFormat;
use artune::store::Store;

pub fn test_settings() -> Settings {
    Settings {
        env: Environment::Dev,
        server_addr: "127.0.0.1:0".to_string(),
        log_format: LogFormat::Pretty,
        database_url: "postgres://localhost/artune_test".to_string(),
        database_max_connections: 1,
        run_migrations: false,
        supabase_url: Url::parse("http://localhost:54321/").unwrap(),
        supabase_anon_key: "anon-key".to_string(),
        supabase_jwt_jwks_url: "http://localhost:54321/auth/v1/.well-known/jwks.json".to_string(),
        supabase_jwt_issuer: "http://localhost:54321/auth/v1".to_string(),
        supabase_jwt_audience: "authenticated".to_string(),
        jwks_cache_ttl_seconds: 1800,
        auth_timeout_seconds: 5,
        session_cookie_secure: false,
        request_body_limit_bytes: 64 * 1024,
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

struct Tables {
    profiles: Vec<UserProfile>,
    artists: Vec<ArtistProfile>,
    services: Vec<ArtistService>,
    clock: DateTime<Utc>,
}

impl Tables {
    /// Strictly increasing timestamps, so creation order is observable
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += Duration::seconds(1);
        self.clock
    }
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    outage: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tables: Mutex::new(Tables {
                profiles: Vec::new(),
                artists: Vec::new(),
                services: Vec::new(),
                clock: Utc::now(),
            }),
            outage: AtomicBool::new(false),
        }
    }
}

impl MemoryStore {
    /// Make every later store call fail, as if the database went away
    pub fn fail_all(&self) {
        self.outage.store(true, Ordering::SeqCst);
    }

    fn reachable(&self) -> AppResult<()> {
        if self.outage.load(Ordering::SeqCst) {
            Err(AppError::internal("database unavailable"))
        } else {
            Ok(())
        }
    }

    pub fn artists(&self) -> Vec<ArtistProfile> {
        self.tables.lock().artists.clone()
    }

    pub fn services(&self) -> Vec<ArtistService> {
        self.tables.lock().services.clone()
    }

    pub fn profile(&self, id: Uuid) -> Option<UserProfile> {
        self.tables.lock().profiles.iter().find(|p| p.id == id).cloned()
    }

    /// Insert an artist account and its profile, bypassing the wizard
    pub fn seed_artist(&self, display_name: &str) -> ArtistProfile {
        let mut tables = self.tables.lock();
        let now = tables.tick();
        let user_id = Uuid::new_v4();
        tables.profiles.push(UserProfile {
            id: user_id,
            email: format!("{}@example.com", Uuid::new_v4()),
            role: Role::Artist,
            full_name: None,
            phone: None,
            created_at: now,
            updated_at: now,
        });

        let artist = ArtistProfile {
            id: Uuid::new_v4(),
            user_id,
            display_name: display_name.to_string(),
            bio: None,
            profile_image_url: None,
            portfolio_images: Vec::new(),
            location: None,
            years_experience: None,
            hourly_rate: None,
            availability_status: AvailabilityStatus::Available,
            verified: false,
            last_active: None,
            created_at: now,
            updated_at: now,
        };
        tables.artists.push(artist.clone());
        artist
    }

    pub fn update_artist(&self, id: Uuid, f: impl FnOnce(&mut ArtistProfile)) {
        let mut tables = self.tables.lock();
        if let Some(artist) = tables.artists.iter_mut().find(|a| a.id == id) {
            f(artist);
        }
    }
}

fn newest_first<T>(mut rows: Vec<T>, created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    rows.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
    rows
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> bool {
        self.reachable().is_ok()
    }

    async fn ensure_user_profile(&self, profile: &NewUserProfile) -> AppResult<UserProfile> {
        self.reachable()?;
        let mut tables = self.tables.lock();
        if let Some(existing) = tables.profiles.iter().find(|p| p.id == profile.id) {
            return Ok(existing.clone());
        }

        let now = tables.tick();
        let row = UserProfile {
            id: profile.id,
            email: profile.email.clone(),
            role: profile.role,
            full_name: None,
            phone: None,
            created_at: now,
            updated_at: now,
        };
        tables.profiles.push(row.clone());
        Ok(row)
    }

    async fn find_user_profile(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        self.reachable()?;
        Ok(self.profile(id))
    }

    async fn list_artists(&self) -> AppResult<Vec<ArtistProfile>> {
        self.reachable()?;
        Ok(newest_first(self.artists(), |a| a.created_at))
    }

    async fn find_artist(&self, id: Uuid) -> AppResult<Option<ArtistProfile>> {
        self.reachable()?;
        Ok(self.artists().into_iter().find(|a| a.id == id))
    }

    async fn find_artist_by_user(&self, user_id: Uuid) -> AppResult<Option<ArtistProfile>> {
        self.reachable()?;
        Ok(self.artists().into_iter().find(|a| a.user_id == user_id))
    }

    async fn upsert_artist_basics(
        &self,
        user_id: Uuid,
        basics: &ArtistBasics,
    ) -> AppResult<ArtistProfile> {
        self.reachable()?;
        let mut tables = self.tables.lock();
        let is_artist = tables
            .profiles
            .iter()
            .any(|p| p.id == user_id && p.role == Role::Artist);
        if !is_artist {
            return Err(AppError::forbidden("Only artists can create an artist profile"));
        }

        let now = tables.tick();
        if let Some(existing) = tables.artists.iter_mut().find(|a| a.user_id == user_id) {
            existing.display_name = basics.display_name.clone();
            existing.location = basics.location.clone();
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let artist = ArtistProfile {
            id: Uuid::new_v4(),
            user_id,
            display_name: basics.display_name.clone(),
            bio: None,
            profile_image_url: None,
            portfolio_images: Vec::new(),
            location: basics.location.clone(),
            years_experience: None,
            hourly_rate: None,
            availability_status: AvailabilityStatus::default(),
            verified: false,
            last_active: None,
            created_at: now,
            updated_at: now,
        };
        tables.artists.push(artist.clone());
        Ok(artist)
    }

    async fn update_artist_details(
        &self,
        user_id: Uuid,
        details: &ProfessionalDetails,
    ) -> AppResult<Option<ArtistProfile>> {
        self.reachable()?;
        let mut tables = self.tables.lock();
        let now = tables.tick();
        Ok(tables
            .artists
            .iter_mut()
            .find(|a| a.user_id == user_id)
            .map(|artist| {
                artist.bio = details.bio.clone();
                artist.years_experience = details.years_experience;
                artist.hourly_rate = details.hourly_rate;
                artist.updated_at = now;
                artist.clone()
            }))
    }

    async fn list_services(&self, artist_id: Uuid) -> AppResult<Vec<ArtistService>> {
        self.reachable()?;
        let rows = self
            .services()
            .into_iter()
            .filter(|s| s.artist_id == artist_id)
            .collect();
        Ok(newest_first(rows, |s| s.created_at))
    }

    async fn insert_service(&self, service: &NewArtistService) -> AppResult<ArtistService> {
        self.reachable()?;
        let mut tables = self.tables.lock();
        if !tables.artists.iter().any(|a| a.id == service.artist_id) {
            return Err(AppError::bad_request("Unknown artist"));
        }

        let now = tables.tick();
        let row = ArtistService {
            id: Uuid::new_v4(),
            artist_id: service.artist_id,
            category: service.category.clone(),
            title: service.title.clone(),
            description: service.description.clone(),
            price: service.price,
            price_type: service.price_type,
            duration_minutes: service.duration_minutes,
            created_at: now,
            updated_at: now,
        };
        tables.services.push(row.clone());
        Ok(row)
    }
}

// ---------------------------------------------------------------------------
// Fake auth service
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeAuth {
    /// email -> (password, identity)
    accounts: Mutex<HashMap<String, (String, Identity)>>,
    /// access token -> identity
    sessions: Mutex<HashMap<String, Identity>>,
    /// refresh token -> identity
    refresh_tokens: Mutex<HashMap<String, Identity>>,
    pub require_confirmation: AtomicBool,
    pub sign_up_calls: AtomicUsize,
    pub sign_in_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
}

impl FakeAuth {
    /// Register an account without touching the store
    pub fn add_account(&self, email: &str, password: &str, role: Role) -> Identity {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            email: Some(email.to_string()),
            role: Some(role),
        };
        self.accounts
            .lock()
            .insert(email.to_string(), (password.to_string(), identity.clone()));
        identity
    }

    /// Issue a valid access token for an identity
    pub fn issue_token(&self, identity: &Identity) -> String {
        let token = format!("token-{}", Uuid::new_v4());
        self.sessions.lock().insert(token.clone(), identity.clone());
        token
    }

    pub fn identity_for(&self, email: &str) -> Option<Identity> {
        self.accounts.lock().get(email).map(|(_, identity)| identity.clone())
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.sessions.lock().contains_key(token)
    }

    /// Let an access token lapse while its refresh token stays valid
    pub fn expire(&self, token: &str) {
        self.sessions.lock().remove(token);
    }

    pub fn start_session(&self, identity: Identity) -> AuthSession {
        let refresh_token = format!("refresh-{}", Uuid::new_v4());
        self.refresh_tokens
            .lock()
            .insert(refresh_token.clone(), identity.clone());

        AuthSession {
            access_token: self.issue_token(&identity),
            refresh_token,
            identity,
        }
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_up(&self, email: &str, password: &str, role: Role) -> AppResult<SignUpOutcome> {
        self.sign_up_calls.fetch_add(1, Ordering::SeqCst);

        if self.accounts.lock().contains_key(email) {
            return Err(AppError::bad_request("User already registered"));
        }
        let identity = self.add_account(email, password, role);

        if self.require_confirmation.load(Ordering::SeqCst) {
            Ok(SignUpOutcome::ConfirmationRequired(identity))
        } else {
            Ok(SignUpOutcome::SignedIn(self.start_session(identity)))
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);

        let account = self.accounts.lock().get(email).cloned();
        match account {
            Some((stored, identity)) if stored == password => Ok(self.start_session(identity)),
            _ => Err(AppError::unauthorized("Invalid login credentials")),
        }
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        let identity = self.sessions.lock().remove(access_token);
        if let Some(identity) = identity {
            self.refresh_tokens
                .lock()
                .retain(|_, owner| owner.user_id != identity.user_id);
        }
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<AuthSession> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);

        // Refresh tokens are single use
        let identity = self.refresh_tokens.lock().remove(refresh_token);
        identity
            .map(|identity| self.start_session(identity))
            .ok_or_else(|| AppError::unauthorized("Invalid Refresh Token"))
    }

    async fn identify(&self, access_token: &str) -> AppResult<Identity> {
        self.sessions
            .lock()
            .get(access_token)
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Invalid or expired session"))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// App harness
// ---------------------------------------------------------------------------

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub auth: Arc<FakeAuth>,
    router: Router,
}

/// A signed-in user and the cookie values that prove it
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
    pub refresh_token: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    pub fn assert_redirect(&self, to: &str) {
        assert!(
            self.status.is_redirection(),
            "expected redirect to {}, got {}: {}",
            to,
            self.status,
            self.body
        );
        assert_eq!(self.location(), Some(to));
    }
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let auth = Arc::new(FakeAuth::default());
        let state = AppState::new(test_settings(), store.clone(), auth.clone());

        Self {
            store,
            auth,
            router: create_app(state),
        }
    }

    /// Create an account with a profile row and an active session
    pub async fn sign_in_as(&self, role: Role) -> TestUser {
        let email = format!("{}@example.com", Uuid::new_v4());
        let identity = self.auth.add_account(&email, "secret1", role);
        self.store
            .ensure_user_profile(&NewUserProfile {
                id: identity.user_id,
                email,
                role,
            })
            .await
            .unwrap();

        let session = self.auth.start_session(identity);
        TestUser {
            id: session.identity.user_id,
            token: session.access_token,
            refresh_token: session.refresh_token,
        }
    }

    pub async fn get(&self, uri: &str, user: Option<&TestUser>) -> TestResponse {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(user) = user {
            request = request.header(header::COOKIE, session_cookie(user));
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, user: Option<&TestUser>) -> TestResponse {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(user) = user {
            request = request.header(header::COOKIE, session_cookie(user));
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

fn session_cookie(user: &TestUser) -> String {
    format!(
        "artune_access_token={}; artune_refresh_token={}",
        user.token, user.refresh_token
    )
}
