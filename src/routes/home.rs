use axum::response::Html;

use crate::auth::MaybeUser;
use crate::views;

/// GET /
pub async fn home(MaybeUser(user): MaybeUser) -> Html<String> {
    views::home::home_page(user.as_ref())
}
