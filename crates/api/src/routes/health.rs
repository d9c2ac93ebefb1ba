//! `GET /health`: liveness of the in-memory tables and the session store.
//!
//! Mounted outside the session layer, so polling it never touches a session.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when a table lock could not be taken in time.
    pub status: &'static str,
    pub version: &'static str,
    /// Every record table answered within the check window.
    pub db_healthy: bool,
    /// Sessions currently held, idle ones included until pruned.
    pub sessions: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = agri_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("A record table did not answer the health check");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        sessions: state.sessions.len().await,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
