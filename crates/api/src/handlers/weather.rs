use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::weather::weather_page;

/// GET /weather
///
/// Current conditions for the configured city. Any upstream failure becomes
/// a plain-text 500 (see [`crate::error::AppError::WeatherUnavailable`]).
pub async fn current_weather(State(state): State<AppState>) -> AppResult<Html<String>> {
    let snapshot = state
        .weather
        .forecast_for_city(&state.config.weather.city)
        .await?;
    Ok(Html(weather_page(&snapshot)))
}
