use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// Account routes.
///
/// ```text
/// GET  /register  -> register_form
/// POST /users     -> create_user
/// POST /login     -> login
/// GET  /logout    -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(users::register_form))
        .route("/users", post(users::create_user))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
}
