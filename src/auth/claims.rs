use serde::{Deserialize, Serialize};

use crate::domain::auth::metadata_role;
use crate::domain::Role;

/// Claims of a Supabase access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    pub aud: String,

    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    #[serde(default)]
    pub nbf: Option<i64>,

    #[serde(default)]
    pub email: Option<String>,

    /// Postgres role of the token ("authenticated"), not the ArtUne role
    #[serde(default)]
    pub role: Option<String>,

    /// Metadata written at sign-up; holds the ArtUne role
    #[serde(default)]
    pub user_metadata: Option<serde_json::Value>,
}

impl Claims {
    pub fn app_role(&self) -> Option<Role> {
        metadata_role(self.user_metadata.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_role_comes_from_user_metadata() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "8d2a4b0e-7d3c-4d0a-9a47-2b6f0c1d9e11",
            "aud": "authenticated",
            "iss": "https://abc.supabase.co/auth/v1",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
            "email": "jane@example.com",
            "role": "authenticated",
            "user_metadata": { "role": "artist" }
        }))
        .unwrap();

        assert_eq!(claims.app_role(), Some(Role::Artist));
        assert_eq!(claims.role.as_deref(), Some("authenticated"));
        assert!(claims.nbf.is_none());
    }
}
