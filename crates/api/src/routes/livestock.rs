use axum::routing::get;
use axum::Router;

use crate::handlers::livestock;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/livestock",
        get(livestock::list_livestock).post(livestock::create_animal),
    )
}
