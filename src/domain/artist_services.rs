//! Services an artist offers (the `artist_services` table)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::artists::{format_duration, format_money};

/// Billing model for a service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    #[default]
    Fixed,
    Hourly,
    Negotiable,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Hourly => "hourly",
            Self::Negotiable => "negotiable",
        }
    }

    /// Capitalized form used on the detail page
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Hourly => "Hourly",
            Self::Negotiable => "Negotiable",
        }
    }
}

impl From<String> for PriceType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "hourly" => Self::Hourly,
            "negotiable" => Self::Negotiable,
            _ => Self::Fixed,
        }
    }
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artist service entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistService {
    pub id: Uuid,
    pub artist_id: Uuid,
    pub category: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub price_type: PriceType,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArtistService {
    pub fn price_label(&self) -> Option<String> {
        self.price.map(format_money)
    }

    pub fn duration_label(&self) -> Option<String> {
        self.duration_minutes.and_then(format_duration)
    }
}

/// Values for inserting a service row
#[derive(Debug, Clone)]
pub struct NewArtistService {
    pub artist_id: Uuid,
    pub category: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub price_type: PriceType,
    pub duration_minutes: Option<i32>,
}

/// A validated service submitted before the owning artist is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDraft {
    pub category: String,
    pub title: String,
    pub price: Option<Decimal>,
}

impl ServiceDraft {
    pub fn for_artist(self, artist_id: Uuid) -> NewArtistService {
        NewArtistService {
            artist_id,
            category: self.category,
            title: self.title,
            description: None,
            price: self.price,
            price_type: PriceType::Fixed,
            duration_minutes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_become_fixed_price_services() {
        let artist_id = Uuid::new_v4();
        let draft = ServiceDraft {
            category: "Live Performance".to_string(),
            title: "Wedding Performance".to_string(),
            price: Some(Decimal::new(50000, 2)),
        };

        let service = draft.for_artist(artist_id);
        assert_eq!(service.artist_id, artist_id);
        assert_eq!(service.price_type, PriceType::Fixed);
        assert_eq!(service.price, Some(Decimal::new(500, 0)));
        assert!(service.description.is_none());
        assert!(service.duration_minutes.is_none());
    }

    #[test]
    fn price_type_parsing_falls_back_to_fixed() {
        assert_eq!(PriceType::from("hourly".to_string()), PriceType::Hourly);
        assert_eq!(PriceType::from("negotiable".to_string()), PriceType::Negotiable);
        assert_eq!(PriceType::from("barter".to_string()), PriceType::Fixed);
    }

    #[test]
    fn price_type_labels_are_capitalized() {
        assert_eq!(PriceType::Fixed.label(), "Fixed");
        assert_eq!(PriceType::Hourly.label(), "Hourly");
        assert_eq!(PriceType::Negotiable.label(), "Negotiable");
    }
}
