//! Profile domain types
//!
//! One `profiles` row per auth identity, carrying the role chosen at registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Fixed at registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Artist,
    #[default]
    Client,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }

    /// Strict parse for untrusted input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "artist" => Some(Self::Artist),
            "client" => Some(Self::Client),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Roles a visitor may pick on the register page.
    pub fn is_self_service(&self) -> bool {
        matches!(self, Self::Artist | Self::Client)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or_default()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for creating a profile row alongside a new auth identity
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_text() {
        for role in [Role::Artist, Role::Client, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::from("garbage".to_string()), Role::Client);
    }

    #[test]
    fn admin_is_not_self_service() {
        assert!(Role::Artist.is_self_service());
        assert!(Role::Client.is_self_service());
        assert!(!Role::Admin.is_self_service());
    }
}
