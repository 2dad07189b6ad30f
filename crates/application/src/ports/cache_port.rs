//! Cache port definition
//!
//! Defines the freshness cache used to deduplicate weather queries.
//! Values are opaque rendered replies; keys are location queries.

#[cfg(test)]
use mockall::automock;

/// Cache port for storing and retrieving rendered weather replies
///
/// Implementations must be safe to share between concurrent event handlers
/// and must not perform I/O. Keys are compared case-insensitively.
#[cfg_attr(test, automock)]
pub trait CachePort: Send + Sync {
    /// Get a fresh cached value by key
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite a value, restarting its freshness window
    fn set(&self, key: &str, value: String);

    /// Get cache statistics (hits, misses, size)
    fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses (absent or expired)
    pub misses: u64,
    /// Current number of entries, including expired ones not yet overwritten
    pub entries: u64,
}

impl CacheStats {
    /// Calculate the hit rate as a fraction (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            // Precision loss is acceptable for statistics display
            self.hits as f64 / total as f64
        }
    }
}

/// TTL values for cached data
pub mod ttl {
    use std::time::Duration;

    /// Rendered current-weather replies (30 minutes)
    pub const WEATHER: Duration = Duration::from_secs(30 * 60);
}
