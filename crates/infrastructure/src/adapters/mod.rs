//! Adapters implementing application ports
//!
//! Each adapter wraps an integration client and translates between its
//! wire types and the application's port types.

mod telegram_adapter;
mod weather_adapter;

pub use telegram_adapter::{FORECAST_BUTTON_LABEL, LOCATION_BUTTON_LABEL, TelegramMessenger};
pub use weather_adapter::WeatherAdapter;
