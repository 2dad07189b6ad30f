//! Reply formatting
//!
//! Pure functions turning weather entities and failures into the chat
//! replies the bot sends. All user-visible text lives here.

use domain::DomainError;
use domain::entities::{ForecastSeries, WeatherSummary};

use crate::error::{ApplicationError, FailureKind};

/// Prefix of every error reply
pub const ERROR_PREFIX: &str = "❌ Error: ";

/// Prefix of error replies to a shared location
pub const LOCATION_ERROR_PREFIX: &str = "❌ Error getting weather for your location: ";

// ── Weather ─────────────────────────────────────────────────────

/// Current weather for a city query
#[must_use]
pub fn render_current(summary: &WeatherSummary) -> String {
    format!(
        "🌤 Weather in {}:\n{}",
        summary.location_name(),
        render_conditions(summary)
    )
}

/// Current weather for a shared location
#[must_use]
pub fn render_location(summary: &WeatherSummary) -> String {
    format!(
        "📍 Weather at your location ({}):\n{}",
        summary.location_name(),
        render_conditions(summary)
    )
}

fn render_conditions(summary: &WeatherSummary) -> String {
    format!(
        "🌡 Temperature: {:.0}°C (feels like {:.0}°C)\n💧 Humidity: {}\n🌬 Wind: {:.0} m/s\n📝 {}",
        summary.temperature(),
        summary.feels_like(),
        summary.humidity(),
        summary.wind_speed(),
        summary.description()
    )
}

/// Forecast grouped by day
///
/// A `📅 DD.MM:` header starts each new calendar day; every entry is one
/// `⏰ HH:00` line.
#[must_use]
pub fn render_forecast(series: &ForecastSeries) -> String {
    let mut lines = vec![format!("🔮 5-day forecast for {}:", series.location_name())];

    let mut current_day = None;
    for entry in series.entries() {
        let day = entry.date();
        if current_day != Some(day) {
            current_day = Some(day);
            lines.push(String::new());
            lines.push(format!("📅 {}:", day.format("%d.%m")));
        }

        lines.push(format!(
            "⏰ {}: {:.0}°C, {}",
            entry.timestamp.format("%H:00"),
            entry.summary.temperature(),
            entry.summary.description()
        ));
    }

    lines.join("\n")
}

// ── Static replies ──────────────────────────────────────────────

/// Reply to `/start` and `/help`
#[must_use]
pub const fn help_text() -> &'static str {
    "Hi! I'm a weather bot. 🌤\n\n\
     You can:\n\
     • Send a city name to get the current weather\n\
     • Tap '🔮 5-day forecast' under a reply to get the forecast\n\
     • Share your location to get the weather where you are\n\n\
     Commands:\n\
     /start - About this bot\n\
     /help - Show this help\n\
     /forecast - 5-day forecast for the last city you asked about"
}

/// Reply to `/forecast` when the user has not queried a city yet
#[must_use]
pub const fn forecast_guidance() -> &'static str {
    "Please ask for the weather in a city first."
}

// ── Errors ──────────────────────────────────────────────────────

/// Error reply for city and forecast queries
#[must_use]
pub fn error_reply(error: &ApplicationError) -> String {
    format!("{ERROR_PREFIX}{}", failure_detail(error))
}

/// Error reply for shared locations
#[must_use]
pub fn location_error_reply(error: &ApplicationError) -> String {
    format!("{LOCATION_ERROR_PREFIX}{}", failure_detail(error))
}

fn failure_detail(error: &ApplicationError) -> &'static str {
    match (error.failure_kind(), error) {
        (Some(FailureKind::NotFound), _) => "location not found",
        (Some(FailureKind::ProviderError), _) => {
            "weather service is unavailable, please try again later"
        },
        (Some(FailureKind::DecodeError), _) => "could not read the weather service response",
        (None, ApplicationError::Domain(DomainError::InvalidCoordinates)) => "invalid coordinates",
        (None, _) => "something went wrong, please try again later",
    }
}
