//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API (current weather and
//! 5-day/3-hour forecast).

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiErrorBody, CurrentResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider does not know the requested location (HTTP 404)
    #[error("Location not found: {0}")]
    NotFound(String),

    /// The API key was rejected (HTTP 401)
    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable (HTTP 5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WeatherError {
    /// Classify a transport-level reqwest error
    fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::ConnectionFailed(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }

    /// Classify a non-success HTTP status
    fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            s if s.is_server_error() => Self::ServiceUnavailable(format!("HTTP {status}")),
            _ => Self::RequestFailed(message),
        }
    }
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (`appid`)
    #[serde(default)]
    pub api_key: String,

    /// Unit system passed as `units` (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Language for condition descriptions passed as `lang` (default: en)
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            units: default_units(),
            language: default_language(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("units", &self.units)
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Current weather for a free-text location (`q=`)
    async fn current_by_city(&self, city: &str) -> Result<CurrentResponse, WeatherError>;

    /// Current weather at a coordinate pair (`lat=`/`lon=`)
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentResponse, WeatherError>;

    /// 5-day/3-hour forecast for a free-text location (`q=`)
    async fn forecast_by_city(&self, city: &str) -> Result<ForecastResponse, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// Every request is bounded by `config.timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Build the URL for an endpoint (`weather` or `forecast`)
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET request and decode the JSON body
    ///
    /// `location` holds the endpoint-specific query pairs; credentials,
    /// units and language are appended here.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        location: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(endpoint, "Querying OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(location)
            .query(&[
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
                ("lang", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::from_status(status, &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::from_transport(&e))?;

        serde_json::from_slice(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> Result<CurrentResponse, WeatherError> {
        self.fetch("weather", &[("q", city.to_string())]).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentResponse, WeatherError> {
        self.fetch(
            "weather",
            &[("lat", latitude.to_string()), ("lon", longitude.to_string())],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn forecast_by_city(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        self.fetch("forecast", &[("q", city.to_string())]).await
    }
}
