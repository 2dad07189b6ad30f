//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `integrations`: Telegram and OpenWeatherMap
//!
//! Telemetry settings live with the subscriber in `crate::telemetry`.

mod integrations;

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub use integrations::{TelegramAppConfig, WeatherAppConfig};

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variables read by the config loader
pub const ENV_PREFIX: &str = "WEATHERBOT";

/// Plain variable holding the bot token in older deployments
pub const LEGACY_TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Plain variable holding the OpenWeatherMap key in older deployments
pub const LEGACY_WEATHER_API_KEY_VAR: &str = "OWM_API_KEY";

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required credential is absent or blank
    #[error("Missing credential {key}: set {env_var} or {legacy_var}")]
    MissingCredential {
        key: &'static str,
        env_var: &'static str,
        legacy_var: &'static str,
    },

    /// A value is present but unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Telegram configuration
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the optional `config.toml` file and environment
    ///
    /// Environment variables use the `WEATHERBOT_` prefix with `__` between
    /// section and key, e.g. `WEATHERBOT_WEATHER__TIMEOUT_SECS=5`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_sources(
            config::File::with_name("config").required(false),
            Self::environment(None),
        )?;
        config.apply_legacy_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Environment source with the bot's prefix and nesting separator
    ///
    /// `source` replaces the process environment; tests use it to inject
    /// variables.
    fn environment(source: Option<config::Map<String, String>>) -> config::Environment {
        // Values stay strings so numeric-looking credentials are not reinterpreted
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(source)
    }

    fn from_sources<F>(file: F, environment: config::Environment) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", integrations::default_weather_base_url())?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(environment)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Fill missing credentials from the plain `TELEGRAM_TOKEN` and
    /// `OWM_API_KEY` variables
    fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if is_blank(self.telegram.bot_token_str()) {
            if let Some(token) = lookup(LEGACY_TELEGRAM_TOKEN_VAR) {
                debug!(var = LEGACY_TELEGRAM_TOKEN_VAR, "Using legacy bot token variable");
                self.telegram.bot_token = Some(SecretString::from(token));
            }
        }

        if is_blank(self.weather.api_key_str()) {
            if let Some(key) = lookup(LEGACY_WEATHER_API_KEY_VAR) {
                debug!(var = LEGACY_WEATHER_API_KEY_VAR, "Using legacy weather API key variable");
                self.weather.api_key = Some(SecretString::from(key));
            }
        }
    }

    /// Check that the bot can start with this configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` when the bot token or API key
    /// is missing or blank, and `ConfigError::Invalid` for an empty base URL
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_blank(self.telegram.bot_token_str()) {
            return Err(ConfigError::MissingCredential {
                key: "telegram.bot_token",
                env_var: "WEATHERBOT_TELEGRAM__BOT_TOKEN",
                legacy_var: LEGACY_TELEGRAM_TOKEN_VAR,
            });
        }

        if is_blank(self.weather.api_key_str()) {
            return Err(ConfigError::MissingCredential {
                key: "weather.api_key",
                env_var: "WEATHERBOT_WEATHER__API_KEY",
                legacy_var: LEGACY_WEATHER_API_KEY_VAR,
            });
        }

        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "weather.base_url",
                reason: "must not be empty".to_string(),
            });
        }

        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "weather.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use config::FileFormat;

    use super::*;
    use crate::telemetry::LogFormat;

    fn load_from(toml: &str, env: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: config::Map<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_sources(
            config::File::from_str(toml, FileFormat::Toml),
            AppConfig::environment(Some(env)),
        )
    }

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.telegram.bot_token = Some(SecretString::from("123456:ABC"));
        config.weather.api_key = Some(SecretString::from("owm-key"));
        config
    }

    // ============================================================================
    // Loading
    // ============================================================================

    #[test]
    fn empty_sources_give_defaults() {
        let config = load_from("", &[]).unwrap();

        assert!(config.telegram.bot_token.is_none());
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.telemetry.format, LogFormat::Pretty);
    }

    #[test]
    fn file_values_are_read() {
        let toml = r#"
            [telegram]
            bot_token = "123456:FILE"

            [weather]
            api_key = "file-key"
            language = "de"
            timeout_secs = 5

            [telemetry]
            log_filter = "debug"
            format = "json"
        "#;

        let config = load_from(toml, &[]).unwrap();

        assert_eq!(config.telegram.bot_token_str(), Some("123456:FILE"));
        assert_eq!(config.weather.api_key_str(), Some("file-key"));
        assert_eq!(config.weather.language, "de");
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(config.telemetry.log_filter, "debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let toml = r#"
            [weather]
            timeout_secs = 5
        "#;

        let config = load_from(
            toml,
            &[
                ("WEATHERBOT_WEATHER__TIMEOUT_SECS", "20"),
                ("WEATHERBOT_TELEGRAM__BOT_TOKEN", "123456:ENV"),
            ],
        )
        .unwrap();

        assert_eq!(config.weather.timeout_secs, 20);
        assert_eq!(config.telegram.bot_token_str(), Some("123456:ENV"));
    }

    #[test]
    fn numeric_api_key_stays_verbatim() {
        let config = load_from("", &[("WEATHERBOT_WEATHER__API_KEY", "00123")]).unwrap();
        assert_eq!(config.weather.api_key_str(), Some("00123"));
    }

    #[test]
    fn malformed_file_is_load_error() {
        let result = load_from("[weather\ntimeout_secs = ", &[]);
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    // ============================================================================
    // Legacy variables
    // ============================================================================

    #[test]
    fn legacy_variables_fill_missing_credentials() {
        let vars = HashMap::from([
            (LEGACY_TELEGRAM_TOKEN_VAR, "123456:LEGACY"),
            (LEGACY_WEATHER_API_KEY_VAR, "legacy-key"),
        ]);
        let mut config = AppConfig::default();

        config.apply_legacy_env(|name| vars.get(name).map(ToString::to_string));

        assert_eq!(config.telegram.bot_token_str(), Some("123456:LEGACY"));
        assert_eq!(config.weather.api_key_str(), Some("legacy-key"));
    }

    #[test]
    fn legacy_variables_do_not_override() {
        let vars = HashMap::from([(LEGACY_TELEGRAM_TOKEN_VAR, "123456:LEGACY")]);
        let mut config = valid_config();

        config.apply_legacy_env(|name| vars.get(name).map(ToString::to_string));

        assert_eq!(config.telegram.bot_token_str(), Some("123456:ABC"));
    }

    #[test]
    fn blank_legacy_variables_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_legacy_env(|_| Some("   ".to_string()));

        assert!(config.telegram.bot_token.is_none());
        assert!(config.weather.api_key.is_none());
    }

    // ============================================================================
    // Validation
    // ============================================================================

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn missing_token_fails() {
        let mut config = valid_config();
        config.telegram.bot_token = None;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCredential {
                key: "telegram.bot_token",
                ..
            })
        ));
    }

    #[test]
    fn blank_api_key_fails() {
        let mut config = valid_config();
        config.weather.api_key = Some(SecretString::from("  "));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("OWM_API_KEY"));
    }

    #[test]
    fn zero_timeout_fails() {
        let mut config = valid_config();
        config.weather.timeout_secs = 0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                key: "weather.timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn debug_redacts_credentials() {
        let debug = format!("{:?}", valid_config());
        assert!(!debug.contains("123456:ABC"));
        assert!(!debug.contains("owm-key"));
    }
}
