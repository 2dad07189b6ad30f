//! Integration configurations: Telegram and OpenWeatherMap.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

// ==============================
// Telegram Configuration
// ==============================

/// Telegram Bot API configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot token from @BotFather (sensitive - uses SecretString)
    #[serde(default)]
    pub bot_token: Option<SecretString>,
}

impl TelegramAppConfig {
    /// Get the bot token as a string slice
    #[must_use]
    pub fn bot_token_str(&self) -> Option<&str> {
        self.bot_token.as_ref().map(ExposeSecret::expose_secret)
    }
}

// ==============================
// Weather Configuration
// ==============================

/// OpenWeatherMap configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Unit system passed to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Language of condition descriptions
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

pub(super) fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            units: default_units(),
            language: default_language(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Get the API key as a string slice
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Build the HTTP client configuration
    ///
    /// A missing key becomes an empty string; `AppConfig::validate` rejects
    /// that before the client is used.
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            units: self.units.clone(),
            language: self.language.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
