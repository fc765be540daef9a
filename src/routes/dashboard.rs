use axum::response::Html;

use crate::auth::RequireUser;
use crate::views;

/// GET /dashboard
pub async fn dashboard(RequireUser(user): RequireUser) -> Html<String> {
    views::dashboard::dashboard_page(&user)
}
