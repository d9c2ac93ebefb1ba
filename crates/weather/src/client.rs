//! HTTP client for the current-weather endpoint.
//!
//! Wraps `GET {api_url}/weather` using [`reqwest`], always in metric units.

use std::time::Duration;

use async_trait::async_trait;

use crate::snapshot::{CurrentWeather, WeatherSnapshot};
use crate::WeatherProvider;

/// Errors from the weather API layer.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The weather API returned a non-2xx status code.
    #[error("Weather API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The payload decoded but lacks a block the snapshot requires.
    #[error("Weather payload is missing '{0}'")]
    MissingField(&'static str),
}

/// HTTP client for an OpenWeatherMap-compatible API.
pub struct WeatherClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a client whose requests give up after `timeout`.
    ///
    /// * `api_url` - Base URL without trailing slash, e.g.
    ///   `https://api.openweathermap.org/data/2.5`.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url, api_key))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Run one lookup with the given location parameters.
    async fn fetch(
        &self,
        location: &[(&str, String)],
        fallback_location: &str,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let response = self
            .client
            .get(format!("{}/weather", self.api_url))
            .query(location)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let payload: CurrentWeather = Self::parse_response(response).await?;
        let snapshot = payload.into_snapshot(fallback_location)?;
        tracing::debug!(location = %snapshot.location, "Weather snapshot fetched");
        Ok(snapshot)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, then decode the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(WeatherError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn forecast_for_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        self.fetch(&[("q", city.to_string())], city).await
    }

    async fn forecast_for_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let fallback = format!("{lat}, {lon}");
        self.fetch(&[("lat", lat.to_string()), ("lon", lon.to_string())], &fallback)
            .await
    }
}
