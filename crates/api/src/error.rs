use agri_db::DbError;
use agri_weather::WeatherError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Plain-text body returned when the weather lookup fails.
pub const WEATHER_UNAVAILABLE_MESSAGE: &str = "Erreur lors de la récupération de la météo";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`]: most variants produce a JSON error body,
/// weather failures produce the plain-text message the pages expect.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A storage error from `agri_db`.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The upstream weather API could not be reached or answered badly.
    #[error("Weather unavailable: {0}")]
    WeatherUnavailable(#[from] WeatherError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Storage errors ---
            AppError::Database(err) => classify_db_error(err),

            // --- Upstream weather errors ---
            AppError::WeatherUnavailable(err) => {
                tracing::error!(error = %err, "Weather lookup failed");
                return (StatusCode::INTERNAL_SERVER_ERROR, WEATHER_UNAVAILABLE_MESSAGE)
                    .into_response();
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a storage error into an HTTP status, error code, and message.
///
/// - Duplicate ids and unique-constraint violations map to 409.
/// - An unavailable table maps to 500 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Duplicate { .. } | DbError::UniqueViolation { .. } => {
            (StatusCode::CONFLICT, "CONFLICT", err.to_string())
        }
        DbError::Unavailable(_) => {
            tracing::error!(error = %err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
