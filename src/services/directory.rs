//! Read-only artist browsing

use uuid::Uuid;

use crate::domain::{ArtistProfile, ArtistService};
use crate::error::AppResult;
use crate::store::Store;

/// Everything the artist detail page shows
#[derive(Debug, Clone)]
pub struct ArtistPage {
    pub artist: ArtistProfile,
    pub services: Vec<ArtistService>,
}

pub struct Directory<'a> {
    store: &'a dyn Store,
}

impl<'a> Directory<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub async fn artists(&self) -> AppResult<Vec<ArtistProfile>> {
        self.store.list_artists().await
    }

    /// `None` when the id is malformed or no such artist exists.
    pub async fn artist_page(&self, raw_id: &str) -> AppResult<Option<ArtistPage>> {
        let Ok(id) = Uuid::parse_str(raw_id) else {
            tracing::debug!(id = %raw_id, "Malformed artist id");
            return Ok(None);
        };

        let Some(artist) = self.store.find_artist(id).await? else {
            return Ok(None);
        };

        let services = self.store.list_services(artist.id).await?;
        Ok(Some(ArtistPage { artist, services }))
    }
}
