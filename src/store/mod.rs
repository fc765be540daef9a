//! Persistence seam
//!
//! Handlers and services talk to the database only through [`Store`], so
//! the HTTP layer can be exercised against an in-memory implementation.

mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    ArtistBasics, ArtistProfile, ArtistService, NewArtistService, NewUserProfile,
    ProfessionalDetails, UserProfile,
};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn health_check(&self) -> bool;

    /// Insert the profile row for an identity, or return the existing one.
    /// An existing row keeps its role.
    async fn ensure_user_profile(&self, profile: &NewUserProfile) -> AppResult<UserProfile>;

    async fn find_user_profile(&self, id: Uuid) -> AppResult<Option<UserProfile>>;

    /// All artist profiles, newest first
    async fn list_artists(&self) -> AppResult<Vec<ArtistProfile>>;

    async fn find_artist(&self, id: Uuid) -> AppResult<Option<ArtistProfile>>;

    async fn find_artist_by_user(&self, user_id: Uuid) -> AppResult<Option<ArtistProfile>>;

    /// Create the artist profile owned by `user_id`, or update its display
    /// name and location if it exists, in one statement.
    ///
    /// Fails with `AppError::Forbidden` when the owner is not an artist.
    async fn upsert_artist_basics(
        &self,
        user_id: Uuid,
        basics: &ArtistBasics,
    ) -> AppResult<ArtistProfile>;

    /// Returns `None` when `user_id` has no artist profile.
    async fn update_artist_details(
        &self,
        user_id: Uuid,
        details: &ProfessionalDetails,
    ) -> AppResult<Option<ArtistProfile>>;

    /// Services of one artist, newest first
    async fn list_services(&self, artist_id: Uuid) -> AppResult<Vec<ArtistService>>;

    async fn insert_service(&self, service: &NewArtistService) -> AppResult<ArtistService>;
}
