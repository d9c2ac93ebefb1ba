//! Current-weather lookups for the farm dashboard.
//!
//! [`WeatherClient`] talks to an OpenWeatherMap-compatible API and reshapes
//! the payload into a flat [`WeatherSnapshot`]. Callers depend on the
//! [`WeatherProvider`] trait so tests can substitute a canned provider.

pub mod client;
pub mod snapshot;

use async_trait::async_trait;

pub use client::{WeatherClient, WeatherError};
pub use snapshot::WeatherSnapshot;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a named city.
    async fn forecast_for_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;

    /// Current conditions at a latitude / longitude.
    async fn forecast_for_coords(&self, lat: f64, lon: f64)
        -> Result<WeatherSnapshot, WeatherError>;
}
