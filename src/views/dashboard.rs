use axum::response::Html;

use super::{escape, layout};
use crate::auth::CurrentUser;
use crate::domain::Role;

fn role_cards(role: Role) -> &'static str {
    match role {
        Role::Artist => {
            r#"            <div class="card">
                <h2>Profile</h2>
                <p class="description">Manage your artist profile</p>
                <a class="button outline" href="/onboarding/artist">Edit Profile</a>
            </div>
            <div class="card">
                <h2>Services</h2>
                <p class="description">Manage your services</p>
                <a class="button outline" href="/onboarding/artist?step=3">Manage Services</a>
            </div>"#
        }
        Role::Client => {
            r#"            <div class="card">
                <h2>Browse Artists</h2>
                <p class="description">Find the perfect artist</p>
                <a class="button" href="/artists">Explore Artists</a>
            </div>
            <div class="card">
                <h2>My Bookings</h2>
                <p class="description">View your bookings</p>
                <span class="button outline">View Bookings</span>
            </div>"#
        }
        Role::Admin => "",
    }
}

pub fn dashboard_page(user: &CurrentUser) -> Html<String> {
    layout(
        "Dashboard",
        Some(user),
        &format!(
            r#"        <h1>Dashboard</h1>
        <div class="grid">
            <div class="card">
                <h2>Welcome, {name}</h2>
                <p class="description">Role: {role}</p>
                <p class="muted">Your ArtUne dashboard is ready. Start exploring the platform!</p>
            </div>
{cards}
        </div>"#,
            name = escape(user.display_name()),
            role = user.role,
            cards = role_cards(user.role),
        ),
    )
}
