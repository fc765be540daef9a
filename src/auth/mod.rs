pub mod claims;
pub mod context;
pub mod jwks;
pub mod middleware;
pub mod provider;
pub mod session;
pub mod supabase;

pub use claims::Claims;
pub use context::{CurrentUser, Identity};
pub use jwks::JwksCache;
pub use middleware::{session_middleware, MaybeUser, RequireUser, UserRejection};
pub use provider::{AuthProvider, AuthSession, SignUpOutcome};
pub use supabase::SupabaseAuth;
