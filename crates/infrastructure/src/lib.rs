//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the OpenWeatherMap and Telegram adapters, the in-memory cache
//! and conversation state, configuration loading, and logging setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use cache::FreshnessCache;
pub use config::{AppConfig, ConfigError, TelegramAppConfig, WeatherAppConfig};
pub use persistence::InMemoryConversationStateStore;
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
