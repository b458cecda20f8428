//! Cache Metrics System
//!
//! Counters describing how a cache has been used, plus the [`CacheMetrics`]
//! reporting trait that renders them as a `BTreeMap<String, f64>`.
//!
//! # Why BTreeMap over HashMap?
//!
//! - **Deterministic ordering**: metrics always appear in the same order
//! - **Reproducible output**: snapshots compare cleanly in tests and logs
//!
//! With a handful of keys the O(log n) lookup cost is irrelevant.
//!
//! # Counter semantics
//!
//! All counters are cumulative for the lifetime of a cache instance. They only
//! ever increase; `clear()` drops entries but leaves the counters alone.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters shared by every cache front-end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`, `get_mut`, `get_with`, ...).
    pub requests: u64,

    /// Lookups that found the key.
    pub cache_hits: u64,

    /// Lookups that did not find the key.
    pub cache_misses: u64,

    /// New entries created by `put`. Overwrites of an existing key are not counted.
    pub insertions: u64,

    /// Entries removed to make room for a new key.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
        self.cache_misses += 1;
    }

    /// Records the creation of a new entry.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an eviction caused by capacity pressure.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Fraction of lookups that were hits, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that were misses, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a `BTreeMap` for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting for cache implementations.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. `"LRU"`).
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_metrics_counters() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_insertion();
        metrics.record_eviction();

        assert_eq!(metrics.requests, 3);
        assert_eq!(metrics.cache_hits, 2);
        assert_eq!(metrics.cache_misses, 1);
        assert_eq!(metrics.insertions, 1);
        assert_eq!(metrics.evictions, 1);
        assert_eq!(metrics.hit_rate(), 2.0 / 3.0);
        assert_eq!(metrics.miss_rate(), 1.0 / 3.0);
    }

    #[test]
    fn test_rates_without_requests() {
        let metrics = CoreCacheMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.miss_rate(), 0.0);
    }

    #[test]
    fn test_btreemap_keys() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_miss();
        let map = metrics.to_btreemap();
        assert_eq!(map.get("cache_misses"), Some(&1.0));
        assert_eq!(map.get("requests"), Some(&1.0));
        assert_eq!(map.get("miss_rate"), Some(&1.0));
        assert_eq!(map.len(), 7);
    }
}
