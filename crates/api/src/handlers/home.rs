use axum::response::Html;

use crate::session::Session;
use crate::views::home::home_page;

/// GET /
///
/// Add-forms for a logged-in user, the login form otherwise.
pub async fn home(session: Session) -> Html<String> {
    let username = session.username().await;
    Html(home_page(username.as_deref(), session.flash()))
}
