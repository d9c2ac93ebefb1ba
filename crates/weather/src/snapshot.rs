//! Upstream payload shape and the flattened snapshot handed to callers.

use agri_core::types::Timestamp;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Flattened view of the current conditions at one location.
///
/// Temperatures are in degrees Celsius, wind speed in m/s, pressure in hPa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub country: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u32,
    pub pressure: u32,
    /// Short condition label, e.g. `"Clouds"`.
    pub condition: Option<String>,
    pub description: Option<String>,
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees.
    pub wind_deg: Option<f64>,
    /// Cloud cover percentage.
    pub clouds: Option<u32>,
    /// Sunrise, Unix epoch seconds.
    pub sunrise: Option<i64>,
    /// Sunset, Unix epoch seconds.
    pub sunset: Option<i64>,
    pub observed_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Upstream payload
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeather {
    #[serde(default)]
    name: Option<String>,
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
    clouds: Option<CloudsBlock>,
    sys: Option<SysBlock>,
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u32,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: Option<f64>,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CloudsBlock {
    all: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

impl CurrentWeather {
    /// Reshape the upstream payload.
    ///
    /// `fallback_location` is used when the payload carries no place name
    /// (coordinate lookups over open water, for instance).
    pub(crate) fn into_snapshot(
        self,
        fallback_location: &str,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let main = self.main.ok_or(WeatherError::MissingField("main"))?;
        let dt = self.dt.ok_or(WeatherError::MissingField("dt"))?;
        let observed_at = DateTime::from_timestamp(dt, 0).ok_or(WeatherError::MissingField("dt"))?;
        let condition = self.weather.into_iter().next();
        let (country, sunrise, sunset) = match self.sys {
            Some(sys) => (sys.country, sys.sunrise, sys.sunset),
            None => (None, None, None),
        };

        Ok(WeatherSnapshot {
            location: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| fallback_location.to_string()),
            country,
            temperature: main.temp,
            feels_like: main.feels_like,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
            humidity: main.humidity,
            pressure: main.pressure,
            condition: condition.as_ref().and_then(|c| c.main.clone()),
            description: condition.and_then(|c| c.description),
            wind_speed: self.wind.as_ref().and_then(|w| w.speed),
            wind_deg: self.wind.and_then(|w| w.deg),
            clouds: self.clouds.and_then(|c| c.all),
            sunrise,
            sunset,
            observed_at,
        })
    }
}
