//! Domain entities

mod forecast;
mod weather_summary;

pub use forecast::{ForecastEntry, ForecastSeries};
pub use weather_summary::WeatherSummary;
