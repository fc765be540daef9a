//! ArtUne: a marketplace connecting artists with clients.
//!
//! Server-rendered pages over a Postgres store and Supabase Auth.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod store;
pub mod views;
