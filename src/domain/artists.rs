//! Artist profile domain types
//!
//! An artist profile is created by the first onboarding step and filled in
//! by the second. Presentation helpers used by the directory and detail
//! pages live here so both pages format values the same way.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking state shown on artist cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Unavailable => "unavailable",
        }
    }

    /// Capitalized form used on the detail page
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Unavailable => "Unavailable",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Available => "status-available",
            Self::Busy => "status-busy",
            Self::Unavailable => "status-unavailable",
        }
    }
}

impl From<String> for AvailabilityStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "busy" => Self::Busy,
            "unavailable" => Self::Unavailable,
            _ => Self::Available,
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artist profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub portfolio_images: Vec<String>,
    pub location: Option<String>,
    pub years_experience: Option<i32>,
    pub hourly_rate: Option<Decimal>,
    pub availability_status: AvailabilityStatus,
    pub verified: bool,
    pub last_active: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArtistProfile {
    /// "$75/hr", or `None` when no rate is set.
    pub fn rate_label(&self) -> Option<String> {
        self.hourly_rate.map(|rate| format!("{}/hr", format_money(rate)))
    }
}

/// Onboarding step 1 payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistBasics {
    pub display_name: String,
    pub location: Option<String>,
}

/// Onboarding step 2 payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfessionalDetails {
    pub bio: Option<String>,
    pub years_experience: Option<i32>,
    pub hourly_rate: Option<Decimal>,
}

/// Dollar amount without trailing zeros: 75.00 renders as "$75", 62.50 as "$62.5".
pub fn format_money(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}

/// Splits a duration into "Hh Mm". Zero or negative durations are not shown.
pub fn format_duration(minutes: i32) -> Option<String> {
    if minutes <= 0 {
        return None;
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}
