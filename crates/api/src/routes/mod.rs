pub mod auth;
pub mod crops;
pub mod equipment;
pub mod finance;
pub mod health;
pub mod livestock;
pub mod weather;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET  /              landing page (add-forms or login form)
/// GET  /register      registration form
/// POST /users         create account
/// POST /login         log in
/// GET  /logout        log out
///
/// GET  /crops         list (login required)
/// POST /crops         add
/// GET  /livestock     list (login required)
/// POST /livestock     add
/// GET  /equipment     list (login required)
/// POST /equipment     add
/// GET  /finance       summary (login required)
/// POST /finance       add
///
/// GET  /weather       current conditions
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .merge(auth::router())
        .merge(crops::router())
        .merge(livestock::router())
        .merge(equipment::router())
        .merge(finance::router())
        .merge(weather::router())
}
