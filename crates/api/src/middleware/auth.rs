//! Login-required extractor for page handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session::Session;
use crate::state::AppState;

/// The logged-in user's display name, taken from the session.
///
/// Use this as an extractor parameter in any page that requires a login.
/// Anonymous callers are redirected to `/`:
///
/// ```ignore
/// async fn my_page(user: CurrentUser) -> Html<String> {
///     Html(format!("Bonjour {}", user.username))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match session.username().await {
            Some(username) => Ok(CurrentUser { username }),
            None => Err(Redirect::to("/").into_response()),
        }
    }
}
