//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions by city or coordinates and the 5-day forecast.
//! Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    City, Condition, CurrentResponse, ForecastItem, ForecastResponse, MainReadings, Wind,
};
