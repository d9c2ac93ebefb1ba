//! Middleware attaching a [`Session`] to every request.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::SignedCookieJar;

use super::cookie::{expired_session_cookie, session_cookie, SESSION_COOKIE};
use super::Session;
use crate::state::AppState;

/// Resolve the caller's session from the signed `agri_session` cookie.
///
/// A missing, forged or expired cookie yields an empty session; nothing is
/// stored until the handler writes to it. The pending flash is taken out of
/// the store here, before the handler runs, so every request consumes it.
///
/// After the handler the cookie is set when a new session was opened and
/// removed when a validly signed one no longer resolves (logout or expiry).
/// Cookies with a bad signature are ignored, never echoed back.
pub async fn load_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let store = Arc::clone(&state.sessions);
    let jar: SignedCookieJar =
        SignedCookieJar::from_headers(request.headers(), state.cookie_key.clone());

    let verified = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());
    let had_session = verified.is_some();

    let resumed = match verified {
        Some(id) if store.resume(&id).await => Some(id),
        Some(_) => {
            tracing::debug!("Session cookie refers to an unknown or expired session");
            None
        }
        None => None,
    };

    let flash = match resumed.as_deref() {
        Some(id) => store.take_flash(id).await,
        None => None,
    };
    let session = Session::new(resumed.clone(), store, flash);
    request.extensions_mut().insert(session.clone());

    let response = next.run(request).await;

    match session.id().await {
        Some(id) if resumed.as_ref() != Some(&id) => {
            (jar.add(session_cookie(id)), response).into_response()
        }
        None if had_session => (jar.remove(expired_session_cookie()), response).into_response(),
        _ => response,
    }
}
