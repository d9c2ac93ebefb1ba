//! Cookie-backed server-side sessions.
//!
//! - [`store`] -- the in-memory session table (username + pending flash).
//! - [`cookie`] -- the signed `agri_session` cookie.
//! - [`flash`] -- one-shot notifications shown on the next page render.
//! - [`layer`] -- middleware that attaches a [`Session`] to every request.
//!
//! A session is only stored once something is written to it, so anonymous
//! page views leave the store untouched.

pub mod cookie;
pub mod flash;
pub mod layer;
pub mod store;

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tokio::sync::Mutex;

pub use flash::{Flash, FlashLevel, FlashModule};
pub use store::SessionStore;

use crate::error::AppError;

/// Per-request handle on the caller's session.
///
/// Inserted into request extensions by [`layer::load_session`]; use it as
/// an extractor in handlers:
///
/// ```ignore
/// async fn handler(session: Session) -> AppResult<Redirect> {
///     session.set_flash(flash).await;
///     Ok(Redirect::to("/"))
/// }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    /// `None` until the first write, or after [`Session::destroy`].
    id: Mutex<Option<String>>,
    store: Arc<SessionStore>,
    /// Flash taken out of the store when the request arrived.
    flash: Option<Flash>,
}

impl Session {
    pub(crate) fn new(id: Option<String>, store: Arc<SessionStore>, flash: Option<Flash>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id: Mutex::new(id),
                store,
                flash,
            }),
        }
    }

    /// Id of the stored session, if one exists now.
    pub(crate) async fn id(&self) -> Option<String> {
        self.inner.id.lock().await.clone()
    }

    /// Id of the stored session, creating it on first use.
    async fn ensure_id(&self) -> String {
        let mut id = self.inner.id.lock().await;
        match id.as_ref() {
            Some(id) => id.clone(),
            None => {
                let created = self.inner.store.create().await;
                *id = Some(created.clone());
                created
            }
        }
    }

    /// The flash pending when this request arrived, if any.
    ///
    /// It has already been removed from the store, so it is shown at most once
    /// whether or not the handler renders it.
    pub fn flash(&self) -> Option<&Flash> {
        self.inner.flash.as_ref()
    }

    /// Username of the logged-in user, if any.
    pub async fn username(&self) -> Option<String> {
        let id = self.inner.id.lock().await;
        match id.as_deref() {
            Some(id) => self.inner.store.username(id).await,
            None => None,
        }
    }

    /// Mark the session as belonging to `username`.
    pub async fn log_in(&self, username: &str) {
        let id = self.ensure_id().await;
        self.inner.store.set_username(&id, username).await;
    }

    /// Stash a flash for the next request.
    pub async fn set_flash(&self, flash: Flash) {
        let id = self.ensure_id().await;
        self.inner.store.set_flash(&id, flash).await;
    }

    /// Drop the session entirely. The next write starts a fresh one.
    pub async fn destroy(&self) {
        if let Some(id) = self.inner.id.lock().await.take() {
            self.inner.store.destroy(&id).await;
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::InternalError("Session layer is not installed".into()))
    }
}
