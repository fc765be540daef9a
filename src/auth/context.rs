use uuid::Uuid;

use super::Claims;
use crate::domain::auth::{metadata_role, SupabaseUser};
use crate::domain::{Role, UserProfile};

/// A verified auth identity, before it is joined with its profile row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
    /// Role recorded in the identity's metadata at sign-up
    pub role: Option<Role>,
}

impl Identity {
    pub fn from_claims(claims: &Claims) -> Result<Self, &'static str> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| "Invalid user ID in token")?;

        Ok(Self {
            user_id,
            email: claims.email.clone(),
            role: claims.app_role(),
        })
    }
}

impl TryFrom<SupabaseUser> for Identity {
    type Error = &'static str;

    fn try_from(user: SupabaseUser) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&user.id).map_err(|_| "Invalid user ID from auth service")?;

        Ok(Self {
            user_id,
            role: metadata_role(user.user_metadata.as_ref()),
            email: user.email,
        })
    }
}

/// The signed-in user for one request: identity merged with its profile row.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    access_token: String,
}

impl CurrentUser {
    /// Profile values win over identity values; the identity only fills gaps.
    pub fn merge(identity: Identity, profile: Option<UserProfile>, access_token: &str) -> Self {
        match profile {
            Some(profile) => Self {
                id: identity.user_id,
                email: profile.email,
                role: profile.role,
                full_name: profile.full_name,
                phone: profile.phone,
                access_token: access_token.to_string(),
            },
            None => Self {
                id: identity.user_id,
                email: identity.email.unwrap_or_default(),
                // Metadata is user-supplied; never trust it for admin
                role: identity
                    .role
                    .filter(Role::is_self_service)
                    .unwrap_or_default(),
                full_name: None,
                phone: None,
                access_token: access_token.to_string(),
            },
        }
    }

    /// Name shown in greetings
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }

    pub fn is_artist(&self) -> bool {
        self.role == Role::Artist
    }

    /// Get the raw access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}
