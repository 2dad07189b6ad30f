//! Weather service port
//!
//! Defines the interface for weather data retrieval. Implementations are
//! stateless and never cache; caching is the dispatcher's concern.

use async_trait::async_trait;
use domain::entities::{ForecastSeries, WeatherSummary};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider queries
///
/// Failures are reported as `ApplicationError::NotFound`,
/// `ApplicationError::Provider` or `ApplicationError::Decode`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions for a free-text location query (usually a city name)
    async fn current_weather(&self, location: &str) -> Result<WeatherSummary, ApplicationError>;

    /// Short-range forecast for a free-text location query
    ///
    /// Entries are chronological and capped at [`ForecastSeries::MAX_ENTRIES`].
    async fn forecast(&self, location: &str) -> Result<ForecastSeries, ApplicationError>;

    /// Current conditions at a coordinate pair
    async fn current_weather_at(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSummary, ApplicationError>;
}
