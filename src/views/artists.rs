//! Artist directory and detail pages

use axum::response::Html;

use super::{escape, layout};
use crate::auth::CurrentUser;
use crate::domain::artists::format_money;
use crate::domain::{ArtistProfile, ArtistService};
use crate::services::ArtistPage;

fn verified_badge(artist: &ArtistProfile, text: &str) -> String {
    if artist.verified {
        format!(r#"<span class="verified">{}</span>"#, text)
    } else {
        String::new()
    }
}

fn artist_card(artist: &ArtistProfile) -> String {
    let location = artist
        .location
        .as_deref()
        .map(|l| format!(r#"<p class="muted">{}</p>"#, escape(l)))
        .unwrap_or_default();
    let bio = artist
        .bio
        .as_deref()
        .map(|b| format!(r#"<p class="bio">{}</p>"#, escape(b)))
        .unwrap_or_default();

    // Zero values are hidden on cards
    let mut facts = Vec::new();
    if let Some(years) = artist.years_experience.filter(|y| *y != 0) {
        facts.push(format!(r#"<span class="accent">{} yrs exp</span>"#, years));
    }
    if let Some(rate) = artist.hourly_rate.filter(|r| !r.is_zero()) {
        facts.push(format!(r#"<span class="rate">{}/hr</span>"#, format_money(rate)));
    }

    format!(
        r#"            <a class="card artist-card" href="/artists/{id}">
                <div style="display: flex; justify-content: space-between">
                    <div>
                        <h2>{name}{badge}</h2>
                        {location}
                    </div>
                    <span class="status {status_class}">{status}</span>
                </div>
                {bio}
                <p>{facts}</p>
            </a>"#,
        id = artist.id,
        name = escape(&artist.display_name),
        badge = verified_badge(artist, "✓"),
        location = location,
        status_class = artist.availability_status.css_class(),
        status = artist.availability_status,
        bio = bio,
        facts = facts.join(" "),
    )
}

pub fn directory_page(user: Option<&CurrentUser>, artists: &[ArtistProfile]) -> Html<String> {
    let content = if artists.is_empty() {
        r#"        <div class="center muted">
            <p>No artists found yet.</p>
            <p>Be the first to join as an artist!</p>
        </div>"#
            .to_string()
    } else {
        let cards: Vec<String> = artists.iter().map(artist_card).collect();
        format!("        <div class=\"grid\">\n{}\n        </div>", cards.join("\n"))
    };

    layout(
        "Discover Artists",
        user,
        &format!(
            r#"        <div class="center">
            <h1>Discover Artists</h1>
            <p class="subtitle">Find the perfect artist for your event</p>
        </div>
{}"#,
            content
        ),
    )
}

fn service_entry(service: &ArtistService) -> String {
    let price = service
        .price_label()
        .map(|price| {
            format!(
                r#"<div style="text-align: right"><div class="rate">{}</div><div class="muted">{}</div></div>"#,
                price,
                service.price_type.label()
            )
        })
        .unwrap_or_default();
    let description = service
        .description
        .as_deref()
        .map(|d| format!(r#"<p>{}</p>"#, escape(d)))
        .unwrap_or_default();
    let duration = service
        .duration_label()
        .map(|d| format!(r#"<p class="muted">Duration: {}</p>"#, d))
        .unwrap_or_default();

    format!(
        r#"                <div class="card service">
                    <div style="display: flex; justify-content: space-between">
                        <div>
                            <h3>{title}</h3>
                            <p class="accent">{category}</p>
                        </div>
                        {price}
                    </div>
                    {description}
                    {duration}
                </div>"#,
        title = escape(&service.title),
        category = escape(&service.category),
        price = price,
        description = description,
        duration = duration,
    )
}

pub fn detail_page(user: Option<&CurrentUser>, page: &ArtistPage) -> Html<String> {
    let artist = &page.artist;

    let location = artist
        .location
        .as_deref()
        .map(|l| format!(r#"<p class="muted">📍 {}</p>"#, escape(l)))
        .unwrap_or_default();
    let about = artist
        .bio
        .as_deref()
        .map(|b| format!(r#"<h3>About</h3><p style="white-space: pre-wrap">{}</p>"#, escape(b)))
        .unwrap_or_default();
    let experience = artist
        .years_experience
        .map(|y| format!(r#"<div><div class="muted">Experience</div><div class="accent">{} years</div></div>"#, y))
        .unwrap_or_default();
    let rate = artist
        .rate_label()
        .map(|r| format!(r#"<div><div class="muted">Hourly Rate</div><div class="rate">{}</div></div>"#, r))
        .unwrap_or_default();

    let services = if page.services.is_empty() {
        String::new()
    } else {
        let entries: Vec<String> = page.services.iter().map(service_entry).collect();
        format!(
            r#"            <div class="card" style="margin-top: 24px">
                <h2>Services Offered</h2>
{}
            </div>"#,
            entries.join("\n")
        )
    };

    let last_active = artist
        .last_active
        .map(|t| format!(r#"<p class="muted center">Last active: {}</p>"#, t.format("%-m/%-d/%Y")))
        .unwrap_or_default();

    layout(
        &artist.display_name,
        user,
        &format!(
            r#"        <a class="button outline" href="/artists">← Back to Artists</a>
        <div class="grid" style="margin-top: 24px">
            <div>
            <div class="card">
                <div style="display: flex; justify-content: space-between">
                    <div>
                        <h1>{name}{badge}</h1>
                        {location}
                    </div>
                    <span class="status {status_class}">{status}</span>
                </div>
                {about}
                <div style="display: flex; gap: 16px; margin-top: 16px">{experience}{rate}</div>
            </div>
{services}
            </div>
            <div class="card">
                <h2>Book This Artist</h2>
                <div class="actions"><span class="button">Send Inquiry</span></div>
                <div class="actions"><span class="button outline">Save to Favorites</span></div>
                {last_active}
            </div>
        </div>"#,
            name = escape(&artist.display_name),
            badge = verified_badge(artist, "✓ Verified"),
            location = location,
            status_class = artist.availability_status.css_class(),
            status = artist.availability_status.label(),
            about = about,
            experience = experience,
            rate = rate,
            services = services,
            last_active = last_active,
        ),
    )
}

pub fn not_found_page(user: Option<&CurrentUser>) -> Html<String> {
    layout(
        "Artist not found",
        user,
        r#"        <div class="center">
            <h1>Artist not found</h1>
            <a class="button outline" href="/artists">Back to Artists</a>
        </div>"#,
    )
}
