//! Application services
//!
//! Page handlers stay thin: each form or page calls one method here, which
//! validates input and talks to the [`Store`](crate::store::Store) and
//! [`AuthProvider`](crate::auth::AuthProvider) seams.

pub mod accounts;
pub mod directory;
pub mod onboarding;

pub use accounts::Accounts;
pub use directory::{ArtistPage, Directory};
pub use onboarding::{Onboarding, WizardState};
