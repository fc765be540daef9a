use axum::response::Html;

use super::layout;
use crate::auth::CurrentUser;

pub fn home_page(user: Option<&CurrentUser>) -> Html<String> {
    layout(
        "Connect Artists with Clients",
        user,
        r#"        <div class="center">
            <h1>ArtUne</h1>
            <p class="subtitle">Connect Artists with Clients</p>
            <p class="muted">The platform for hiring talented artists for your events and gigs</p>
            <div class="actions narrow">
                <a class="button" href="/register">Get Started</a>
                <a class="button outline" href="/artists">Browse Artists</a>
            </div>
        </div>"#,
    )
}
