//! Forecast series entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::WeatherSummary;

/// One forecast point: the conditions expected at `timestamp`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub summary: WeatherSummary,
}

impl ForecastEntry {
    pub const fn new(timestamp: DateTime<Utc>, summary: WeatherSummary) -> Self {
        Self { timestamp, summary }
    }

    /// Calendar day of this entry (UTC)
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Time of day of this entry (UTC)
    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

/// Ordered forecast for one location
///
/// Entries keep the order the provider delivered them in (non-decreasing
/// timestamps) and never exceed [`ForecastSeries::MAX_ENTRIES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    location_name: String,
    entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    /// Five days' worth of the provider's 3-hour slots, as displayed to users
    pub const MAX_ENTRIES: usize = 15;

    /// Build a series, keeping at most the first `MAX_ENTRIES` entries
    pub fn new(location_name: impl Into<String>, entries: impl IntoIterator<Item = ForecastEntry>) -> Self {
        Self {
            location_name: location_name.into(),
            entries: entries.into_iter().take(Self::MAX_ENTRIES).collect(),
        }
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn entries(&self) -> &[ForecastEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
