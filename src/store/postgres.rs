use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::Store;
use crate::db;
use crate::domain::{
    ArtistBasics, ArtistProfile, ArtistService, NewArtistService, NewUserProfile,
    ProfessionalDetails, UserProfile,
};
use crate::error::{AppError, AppResult};

const ARTIST_COLUMNS: &str = r#"
    id, user_id, display_name, bio, profile_image_url, portfolio_images,
    location, years_experience, hourly_rate, availability_status, verified,
    last_active, created_at, updated_at
"#;

const SERVICE_COLUMNS: &str = r#"
    id, artist_id, category, title, description, price, price_type,
    duration_minutes, created_at, updated_at
"#;

/// Database row for profile
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: String,
    role: String,
    full_name: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            role: row.role.into(),
            full_name: row.full_name,
            phone: row.phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ArtistRow {
    id: Uuid,
    user_id: Uuid,
    display_name: String,
    bio: Option<String>,
    profile_image_url: Option<String>,
    portfolio_images: Vec<String>,
    location: Option<String>,
    years_experience: Option<i32>,
    hourly_rate: Option<Decimal>,
    availability_status: String,
    verified: bool,
    last_active: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ArtistRow> for ArtistProfile {
    fn from(row: ArtistRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            display_name: row.display_name,
            bio: row.bio,
            profile_image_url: row.profile_image_url,
            portfolio_images: row.portfolio_images,
            location: row.location,
            years_experience: row.years_experience,
            hourly_rate: row.hourly_rate,
            availability_status: row.availability_status.into(),
            verified: row.verified,
            last_active: row.last_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ServiceRow {
    id: Uuid,
    artist_id: Uuid,
    category: String,
    title: String,
    description: Option<String>,
    price: Option<Decimal>,
    price_type: String,
    duration_minutes: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ServiceRow> for ArtistService {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            artist_id: row.artist_id,
            category: row.category,
            title: row.title,
            description: row.description,
            price: row.price,
            price_type: row.price_type.into(),
            duration_minutes: row.duration_minutes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// [`Store`] backed by the ArtUne Postgres schema
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> bool {
        db::health_check(&self.pool).await
    }

    async fn ensure_user_profile(&self, profile: &NewUserProfile) -> AppResult<UserProfile> {
        // The no-op update makes RETURNING yield the existing row
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (id, email, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET email = profiles.email
            RETURNING id, email, role, full_name, phone, created_at, updated_at
            "#,
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(profile.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_user_profile(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, email, role, full_name, phone, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_artists(&self) -> AppResult<Vec<ArtistProfile>> {
        let rows = sqlx::query_as::<_, ArtistRow>(&format!(
            "SELECT {} FROM artist_profiles ORDER BY created_at DESC",
            ARTIST_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_artist(&self, id: Uuid) -> AppResult<Option<ArtistProfile>> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "SELECT {} FROM artist_profiles WHERE id = $1",
            ARTIST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_artist_by_user(&self, user_id: Uuid) -> AppResult<Option<ArtistProfile>> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "SELECT {} FROM artist_profiles WHERE user_id = $1",
            ARTIST_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn upsert_artist_basics(
        &self,
        user_id: Uuid,
        basics: &ArtistBasics,
    ) -> AppResult<ArtistProfile> {
        // Selecting from profiles makes a non-artist owner insert nothing
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            r#"
            INSERT INTO artist_profiles (user_id, display_name, location)
            SELECT p.id, $2, $3
            FROM profiles p
            WHERE p.id = $1 AND p.role = 'artist'
            ON CONFLICT (user_id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                location = EXCLUDED.location,
                updated_at = NOW()
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        ))
        .bind(user_id)
        .bind(&basics.display_name)
        .bind(&basics.location)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::forbidden("Only artists can create an artist profile"))
    }

    async fn update_artist_details(
        &self,
        user_id: Uuid,
        details: &ProfessionalDetails,
    ) -> AppResult<Option<ArtistProfile>> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            r#"
            UPDATE artist_profiles SET
                bio = $2,
                years_experience = $3,
                hourly_rate = $4,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        ))
        .bind(user_id)
        .bind(&details.bio)
        .bind(details.years_experience)
        .bind(details.hourly_rate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_services(&self, artist_id: Uuid) -> AppResult<Vec<ArtistService>> {
        let rows = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {} FROM artist_services WHERE artist_id = $1 ORDER BY created_at DESC",
            SERVICE_COLUMNS
        ))
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_service(&self, service: &NewArtistService) -> AppResult<ArtistService> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            r#"
            INSERT INTO artist_services
                (artist_id, category, title, description, price, price_type, duration_minutes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(service.artist_id)
        .bind(&service.category)
        .bind(&service.title)
        .bind(&service.description)
        .bind(service.price)
        .bind(service.price_type.as_str())
        .bind(service.duration_minutes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
