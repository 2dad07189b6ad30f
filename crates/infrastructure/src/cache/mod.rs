//! Cache implementations
//!
//! - `FreshnessCache`: in-memory TTL cache for rendered weather replies

mod freshness_cache;

pub use freshness_cache::FreshnessCache;
