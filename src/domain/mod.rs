//! Domain types and form payloads
//!
//! These types define the data structures for ArtUne entities.

pub mod artist_services;
pub mod artists;
pub mod auth;
pub mod onboarding;
pub mod profiles;

pub use artist_services::{ArtistService, NewArtistService, PriceType, ServiceDraft};
pub use artists::{ArtistBasics, ArtistProfile, AvailabilityStatus, ProfessionalDetails};
pub use profiles::{NewUserProfile, Role, UserProfile};
