//! The signed `agri_session` cookie.
//!
//! The cookie only carries the session id; [`SignedCookieJar`] signs it so
//! clients cannot guess or forge ids, and the store still decides whether a
//! verified id is live.
//!
//! [`SignedCookieJar`]: axum_extra::extract::cookie::SignedCookieJar

use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use sha2::{Digest, Sha512};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "agri_session";

/// Derive the cookie signing key from the configured secret.
///
/// The secret may be any length; SHA-512 stretches or folds it into the 64
/// bytes [`Key::from`] requires.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Cookie carrying a session id. Signing happens when it is added to the jar.
pub fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie to pass to the jar's `remove` when a session ends.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
