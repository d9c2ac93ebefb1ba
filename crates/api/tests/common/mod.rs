#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use agri_api::config::{ServerConfig, WeatherConfig};
use agri_api::router::build_app_router;
use agri_api::session::cookie::session_key;
use agri_api::session::SessionStore;
use agri_api::state::AppState;
use agri_weather::{WeatherError, WeatherProvider, WeatherSnapshot};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        session_secret: "test-session-secret".to_string(),
        session_ttl_secs: 3600,
        session_max: 1000,
        weather: WeatherConfig {
            api_key: "unused".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
            city: "Strasbourg".to_string(),
            timeout_secs: 1,
        },
    }
}

// ---------------------------------------------------------------------------
// Weather stand-in
// ---------------------------------------------------------------------------

/// Canned weather source: either fixed conditions or a failure.
pub struct StubWeather {
    pub fail: bool,
}

pub fn sample_snapshot(location: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.to_string(),
        country: Some("FR".to_string()),
        temperature: 12.5,
        feels_like: 11.0,
        temp_min: 10.0,
        temp_max: 14.0,
        humidity: 81,
        pressure: 1016,
        condition: Some("Clouds".to_string()),
        description: Some("nuageux".to_string()),
        wind_speed: Some(3.6),
        wind_deg: Some(240.0),
        clouds: Some(75),
        sunrise: Some(1_700_000_000),
        sunset: Some(1_700_030_000),
        observed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn forecast_for_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        if self.fail {
            return Err(WeatherError::ApiError {
                status: 401,
                body: "Invalid API key".to_string(),
            });
        }
        Ok(sample_snapshot(city))
    }

    async fn forecast_for_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.forecast_for_city(&format!("{lat}, {lon}")).await
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Fresh state over empty storage, with the given weather source and a
/// session store holding at most `session_max` sessions.
pub fn build_test_state(weather: StubWeather, session_max: usize) -> AppState {
    let mut config = test_config();
    config.session_max = session_max;
    AppState {
        pool: agri_db::create_pool(),
        sessions: Arc::new(SessionStore::new(
            Duration::from_secs(config.session_ttl_secs),
            config.session_max,
        )),
        cookie_key: session_key(&config.session_secret),
        config: Arc::new(config),
        weather: Arc::new(weather),
    }
}

/// Build the full application router over `state`.
pub fn build_test_app_from(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    build_app_router(state, &config)
}

/// Build the full application router over fresh storage, with the given
/// weather source.
pub fn build_test_app_with(weather: StubWeather) -> Router {
    build_test_app_from(build_test_state(weather, test_config().session_max))
}

/// Build the full application router with working weather.
pub fn build_test_app() -> Router {
    build_test_app_with(StubWeather { fail: false })
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a GET, optionally carrying a `Cookie` header.
pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a url-encoded form POST, optionally carrying a `Cookie` header.
pub async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect the response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `agri_session=...` pair from a `Set-Cookie` header, ready to send
/// back as a `Cookie` header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("agri_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Assert a 303 redirect to `/`.
pub fn assert_redirect_home(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
}

/// Register `email` / `password` as "Jean", log in, and return the
/// session cookie of the logged-in browser.
pub async fn register_and_login(app: &Router, email: &str, password: &str) -> String {
    let form = format!("username=Jean&email={email}&password={password}&confirm={password}");
    let response = post_form(app.clone(), "/users", &form, None).await;
    assert_redirect_home(&response);

    let form = format!("email={email}&password={password}");
    let response = post_form(app.clone(), "/login", &form, None).await;
    assert_redirect_home(&response);
    session_cookie(&response).expect("login should open a session")
}
