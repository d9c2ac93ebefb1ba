/// Fallback session secret used when `SESSION_SECRET` is unset.
///
/// Anyone who knows it can forge session cookies; it exists for local
/// development only.
pub const DEV_SESSION_SECRET: &str = "dev_secret";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Secret the session cookie signing key is derived from.
    pub session_secret: String,
    /// Seconds a session may sit idle before it is dropped (default: `86400`).
    pub session_ttl_secs: u64,
    /// Most sessions held at once (default: `10000`).
    pub session_max: usize,
    /// Upstream weather API settings.
    pub weather: WeatherConfig,
}

/// Settings for the outbound weather lookup.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    /// Base URL of the current-weather API.
    pub api_url: String,
    /// City shown on the `/weather` page.
    pub city: String,
    /// Per-request timeout for the upstream call.
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `3000`                                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `SESSION_SECRET`       | `dev_secret` (warns)                      |
    /// | `SESSION_TTL_SECS`     | `86400`                                   |
    /// | `SESSION_MAX`          | `10000`                                   |
    /// | `WEATHER_API_KEY`      | empty                                     |
    /// | `WEATHER_API_URL`      | `https://api.openweathermap.org/data/2.5` |
    /// | `WEATHER_CITY`         | `Strasbourg`                              |
    /// | `WEATHER_TIMEOUT_SECS` | `10`                                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET is not set; falling back to the development secret");
            DEV_SESSION_SECRET.into()
        });

        let session_ttl_secs: u64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid u64");

        let session_max: usize = std::env::var("SESSION_MAX")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .expect("SESSION_MAX must be a valid usize");

        Self {
            host,
            port,
            request_timeout_secs,
            session_secret,
            session_ttl_secs,
            session_max,
            weather: WeatherConfig::from_env(),
        }
    }
}

impl WeatherConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("WEATHER_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("WEATHER_API_KEY is not set; weather lookups will be rejected upstream");
        }

        let timeout_secs: u64 = std::env::var("WEATHER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("WEATHER_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            api_url: std::env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".into()),
            city: std::env::var("WEATHER_CITY").unwrap_or_else(|_| "Strasbourg".into()),
            timeout_secs,
        }
    }
}
