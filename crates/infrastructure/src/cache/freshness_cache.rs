//! In-memory freshness cache
//!
//! Stores rendered weather replies keyed by the lowercased location query.
//! Entries older than [`ttl::WEATHER`] are treated as absent; they stay in
//! the map until the same key is written again.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use application::ports::{CachePort, CacheStats, ttl};
use parking_lot::RwLock;
use tokio::time::Instant;
use tracing::trace;

#[derive(Debug)]
struct CacheEntry {
    value: String,
    stored_at: Instant,
}

/// Thread-safe TTL cache for weather replies
///
/// Reads take a shared lock, writes an exclusive one. The lock is never held
/// across an await point, so handlers running on different tasks can share a
/// single instance.
pub struct FreshnessCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for FreshnessCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreshnessCache")
            .field("entries", &self.entries.read().len())
            .field("ttl", &self.ttl)
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for FreshnessCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FreshnessCache {
    /// Create an empty cache with the weather TTL
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: ttl::WEATHER,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Normalize a location query into a cache key
    #[must_use]
    pub fn normalize_key(key: &str) -> String {
        key.to_lowercase()
    }
}

impl CachePort for FreshnessCache {
    fn get(&self, key: &str) -> Option<String> {
        let key = Self::normalize_key(key);
        let value = {
            let entries = self.entries.read();
            entries
                .get(&key)
                .filter(|entry| entry.stored_at.elapsed() < self.ttl)
                .map(|entry| entry.value.clone())
        };

        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Cache miss");
        }
        value
    }

    fn set(&self, key: &str, value: String) {
        let key = Self::normalize_key(key);
        trace!(key = %key, len = value.len(), "Cache set");
        self.entries.write().insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.read().len() as u64,
        }
    }
}
