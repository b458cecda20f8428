//! LRU Cache Metrics

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// Metrics for the LRU cache.
///
/// Eviction is purely recency based, so LRU reports only the core counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache front-ends.
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates zeroed LRU metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lookups that found their key.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.core.cache_hits
    }

    /// Number of lookups that did not find their key.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.core.cache_misses
    }

    /// Number of capacity evictions.
    #[inline]
    pub fn evictions(&self) -> u64 {
        self.core.evictions
    }

    /// Converts LRU metrics to a `BTreeMap` for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
