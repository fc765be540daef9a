//! Server-rendered HTML pages
//!
//! Every page goes through [`layout`]. Anything user-supplied is passed
//! through [`escape`] before it reaches the markup.

pub mod artists;
pub mod auth;
pub mod dashboard;
pub mod errors;
pub mod home;
pub mod onboarding;

use axum::response::Html;

use crate::auth::CurrentUser;

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #1c1c24, #2a2a35 50%, #1c1c24);
            color: #e5e7eb;
            min-height: 100vh;
        }
        a { color: #a78bfa; text-decoration: none; }
        nav {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 16px 32px;
            border-bottom: 1px solid #33333f;
        }
        nav .brand { font-weight: 700; font-size: 20px; color: #ff6f61; }
        nav .links a, nav .links form { margin-left: 16px; display: inline; }
        main { max-width: 1100px; margin: 0 auto; padding: 48px 16px; }
        h1 { font-size: 40px; margin-bottom: 16px; color: #c4b5fd; }
        .subtitle { color: #9ca3af; margin-bottom: 32px; }
        .center { text-align: center; }
        .card {
            background: #23232d;
            border: 1px solid #33333f;
            border-radius: 8px;
            padding: 24px;
        }
        .card h2 { font-size: 22px; margin-bottom: 8px; }
        .card .description { color: #9ca3af; margin-bottom: 16px; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
        .narrow { max-width: 480px; margin: 0 auto; }
        label { display: block; margin: 12px 0 4px; font-size: 14px; }
        input, textarea {
            width: 100%;
            padding: 8px 12px;
            border-radius: 6px;
            border: 1px solid #3f3f4d;
            background: #1c1c24;
            color: #e5e7eb;
        }
        textarea { min-height: 100px; }
        .button {
            display: inline-block;
            padding: 10px 24px;
            border-radius: 6px;
            border: 1px solid #ff6f61;
            background: #ff6f61;
            color: #fff;
            cursor: pointer;
            font-size: 15px;
        }
        .button.outline { background: transparent; color: #a78bfa; border-color: #a78bfa; }
        .actions { display: flex; gap: 12px; margin-top: 20px; }
        .actions > * { flex: 1; text-align: center; }
        .error {
            margin-top: 16px;
            padding: 12px;
            border-radius: 6px;
            background: rgba(239, 68, 68, 0.1);
            color: #f87171;
            font-size: 14px;
        }
        .status { padding: 2px 8px; border-radius: 4px; font-size: 12px; }
        .status-available { background: rgba(34, 197, 94, 0.2); color: #4ade80; }
        .status-busy { background: rgba(234, 179, 8, 0.2); color: #facc15; }
        .status-unavailable { background: rgba(239, 68, 68, 0.2); color: #f87171; }
        .verified { color: #22d3ee; margin-left: 8px; font-size: 14px; }
        .muted { color: #9ca3af; }
        .accent { color: #22d3ee; }
        .rate { color: #ff6f61; }
"#;

/// Wrap page content in the shared document shell and navigation bar
pub fn layout(title: &str, user: Option<&CurrentUser>, body: &str) -> Html<String> {
    let links = match user {
        Some(user) => format!(
            r#"<a href="/artists">Artists</a>
            <a href="/dashboard">{}</a>
            <form method="post" action="/logout"><button class="button outline" type="submit">Sign Out</button></form>"#,
            escape(user.display_name())
        ),
        None => r#"<a href="/artists">Artists</a>
            <a href="/login">Sign In</a>
            <a href="/register">Sign Up</a>"#
            .to_string(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | ArtUne</title>
    <style>{style}</style>
</head>
<body>
    <nav>
        <a class="brand" href="/">ArtUne</a>
        <div class="links">
            {links}
        </div>
    </nav>
    <main>
{body}
    </main>
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        links = links,
        body = body,
    ))
}

/// Inline form error, or nothing
pub fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<div class="error" role="alert">{}</div>"#, escape(message)),
        None => String::new(),
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
