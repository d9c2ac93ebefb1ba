use axum::routing::get;
use axum::Router;

use crate::handlers::equipment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/equipment",
        get(equipment::list_equipment).post(equipment::create_equipment),
    )
}
