//! Weather summary entity
//!
//! A single observation (or forecast point) for one location.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Humidity;

/// Weather conditions for a single location at a single point in time
///
/// Invariants enforced at construction:
/// - humidity is within 0-100% (guaranteed by [`Humidity`])
/// - temperature, feels-like temperature and wind speed are finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    location_name: String,
    temperature: f64,
    feels_like: f64,
    humidity: Humidity,
    wind_speed: f64,
    description: String,
}

impl WeatherSummary {
    /// Create a validated weather summary
    ///
    /// # Arguments
    /// * `location_name` - Provider's name for the location (may be empty for remote coordinates)
    /// * `temperature` - Air temperature in the configured unit system
    /// * `feels_like` - Apparent temperature
    /// * `humidity` - Relative humidity
    /// * `wind_speed` - Wind speed
    /// * `description` - Human-readable condition, e.g. "clear sky"
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonFiniteMeasurement` if any numeric field is NaN or infinite.
    pub fn new(
        location_name: impl Into<String>,
        temperature: f64,
        feels_like: f64,
        humidity: Humidity,
        wind_speed: f64,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        for (field, value) in [
            ("temperature", temperature),
            ("feels_like", feels_like),
            ("wind_speed", wind_speed),
        ] {
            if !value.is_finite() {
                return Err(DomainError::non_finite(field));
            }
        }

        Ok(Self {
            location_name: location_name.into(),
            temperature,
            feels_like,
            humidity,
            wind_speed,
            description: description.into(),
        })
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    pub const fn feels_like(&self) -> f64 {
        self.feels_like
    }

    pub const fn humidity(&self) -> Humidity {
        self.humidity
    }

    pub const fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
