use std::sync::Arc;

use agri_weather::WeatherProvider;
use axum_extra::extract::cookie::Key;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory database holding every record table.
    pub pool: agri_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Server-side session data keyed by session id.
    pub sessions: Arc<SessionStore>,
    /// Signing key for the session cookie, derived from `session_secret`.
    pub cookie_key: Key,
    /// Current-weather source for the `/weather` page.
    pub weather: Arc<dyn WeatherProvider>,
}
