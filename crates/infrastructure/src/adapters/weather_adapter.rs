//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{
    DomainError, ForecastEntry, ForecastSeries, GeoLocation, Humidity, WeatherSummary,
};
use integration_weather::{
    Condition, CurrentResponse, ForecastResponse, MainReadings, OpenWeatherMapClient,
    WeatherClient, WeatherConfig, WeatherError, Wind,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    #[must_use]
    pub const fn from_client(client: OpenWeatherMapClient) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotFound(message) => ApplicationError::NotFound(message),
            WeatherError::ParseError(message) => ApplicationError::Decode(message),
            e @ (WeatherError::Unauthorized
            | WeatherError::RateLimitExceeded
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::Timeout
            | WeatherError::ConnectionFailed(_)) => ApplicationError::Provider(e.to_string()),
        }
    }

    /// Build a domain summary from one set of provider readings
    ///
    /// Any value the domain rejects is a malformed response.
    fn map_summary(
        name: &str,
        main: &MainReadings,
        wind: &Wind,
        condition: Option<&Condition>,
    ) -> Result<WeatherSummary, ApplicationError> {
        let build = || -> Result<WeatherSummary, DomainError> {
            let condition = condition.ok_or(DomainError::MissingValue("weather description"))?;
            let humidity = Humidity::new(main.humidity)?;
            WeatherSummary::new(
                name,
                main.temp,
                main.feels_like,
                humidity,
                wind.speed,
                condition.description.as_str(),
            )
        };
        build().map_err(|e| ApplicationError::Decode(e.to_string()))
    }

    fn map_current(current: &CurrentResponse) -> Result<WeatherSummary, ApplicationError> {
        Self::map_summary(
            &current.name,
            &current.main,
            &current.wind,
            current.primary_condition(),
        )
    }

    fn map_forecast(forecast: &ForecastResponse) -> Result<ForecastSeries, ApplicationError> {
        let location_name = forecast.city.name.as_str();
        let entries = forecast
            .list
            .iter()
            .take(ForecastSeries::MAX_ENTRIES)
            .map(|item| {
                let timestamp = item.timestamp().ok_or_else(|| {
                    ApplicationError::Decode(format!("invalid forecast timestamp {}", item.dt))
                })?;
                let summary = Self::map_summary(
                    location_name,
                    &item.main,
                    &item.wind,
                    item.primary_condition(),
                )?;
                Ok(ForecastEntry::new(timestamp, summary))
            })
            .collect::<Result<Vec<_>, ApplicationError>>()?;

        Ok(ForecastSeries::new(location_name, entries))
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_weather(&self, location: &str) -> Result<WeatherSummary, ApplicationError> {
        let result = self
            .client
            .current_by_city(location)
            .await
            .map_err(Self::map_error)
            .and_then(|c| Self::map_current(&c));

        match &result {
            Ok(summary) => {
                debug!(
                    location_name = %summary.location_name(),
                    temperature = summary.temperature(),
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn forecast(&self, location: &str) -> Result<ForecastSeries, ApplicationError> {
        let result = self
            .client
            .forecast_by_city(location)
            .await
            .map_err(Self::map_error)
            .and_then(|f| Self::map_forecast(&f));

        match &result {
            Ok(series) => {
                debug!(entries = series.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result
    }

    #[instrument(skip(self, location), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather_at(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSummary, ApplicationError> {
        let result = self
            .client
            .current_by_coordinates(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)
            .and_then(|c| Self::map_current(&c));

        match &result {
            Ok(summary) => {
                debug!(
                    location_name = %summary.location_name(),
                    "Retrieved current weather at coordinates"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather at coordinates");
            },
        }

        result
    }
}
