use axum::routing::get;
use axum::Router;

use crate::handlers::crops;
use crate::state::AppState;

/// ```text
/// GET  /crops  -> list_crops
/// POST /crops  -> create_crop
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/crops", get(crops::list_crops).post(crops::create_crop))
}
