use axum::routing::get;
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

/// ```text
/// GET  /finance  -> finance_summary
/// POST /finance  -> create_finance_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/finance",
        get(finance::finance_summary).post(finance::create_finance_record),
    )
}
