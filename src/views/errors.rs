use axum::{http::StatusCode, response::Html};

use super::{escape, layout};

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        None,
        &format!(
            r#"        <div class="center">
            <h1>{code} {title}</h1>
            <p class="subtitle">{message}</p>
            <a class="button outline" href="/">Back to Home</a>
        </div>"#,
            code = status.as_u16(),
            title = escape(title),
            message = escape(message),
        ),
    )
}
