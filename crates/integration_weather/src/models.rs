//! OpenWeatherMap response models
//!
//! Wire types for the `/weather` and `/forecast` endpoints of the
//! OpenWeatherMap 2.5 API. Only the fields the bot renders are modelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    /// Resolved location name; empty for points without a named place
    #[serde(default)]
    pub name: String,
    pub main: MainReadings,
    pub wind: Wind,
    /// Condition list; the first entry is the primary condition
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl CurrentResponse {
    /// The primary weather condition, if the provider sent any
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// Temperature and humidity block shared by both endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    /// Relative humidity in percent; kept signed so bad values surface as errors
    pub humidity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// One weather condition entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub main: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Response of `GET /forecast` (5 days in 3-hour steps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    pub city: City,
}

/// One 3-hour forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Slot start (Unix seconds, UTC)
    pub dt: i64,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Slot start as `YYYY-MM-DD HH:MM:SS` (UTC)
    #[serde(default)]
    pub dt_txt: String,
}

impl ForecastItem {
    /// Slot start as a UTC timestamp; `None` if `dt` is out of range
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    /// The primary weather condition, if the provider sent any
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// Error body sent with non-success responses, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
