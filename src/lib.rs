//! # recency-cache
//!
//! A fixed-capacity, in-memory key/value cache with Least Recently Used (LRU)
//! eviction, built as an embeddable component for memoized lookups: decoded
//! frames, routing decisions, computed results.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Cache Engine                        │
//! │                                                            │
//! │   put/get ──▶ Index (HashMap<K, Handle>)                   │
//! │                  │                                         │
//! │                  ▼                                         │
//! │             Recency List (slot arena, LRU ─▶ MRU)          │
//! │                  │                                         │
//! │                  ▼                                         │
//! │             Metrics (hits, misses, evictions)              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - The **index** gives O(1) membership and lookup.
//! - The **recency list** orders entries from least to most recently used and
//!   gives O(1) promotion and eviction. Entries live in an arena and link to
//!   each other by slot handle, so the crate contains no `unsafe` code.
//! - **Metrics** count hits, misses, insertions and evictions for the
//!   lifetime of the cache.
//!
//! ## Quick Reference
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LruCache`] | Single-threaded cache, `&mut self` operations |
//! | [`ConcurrentLruCache`] | Thread-safe cache, one lock around index + list (feature `concurrent`) |
//!
//! ## Code Examples
//!
//! ```rust
//! use recency_cache::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! A capacity of zero is rejected at construction:
//!
//! ```rust
//! use recency_cache::{CacheError, LruCache};
//!
//! let err = LruCache::<u64, u64>::new(0).unwrap_err();
//! assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });
//! ```
//!
//! Absence is not an error. Values may themselves be optional; a stored `None`
//! is still a hit:
//!
//! ```rust
//! use recency_cache::LruCache;
//!
//! let mut cache: LruCache<&str, Option<u32>> = LruCache::new(4).unwrap();
//! cache.put("unset", None);
//! assert_eq!(cache.get(&"unset"), Some(&None));
//! assert_eq!(cache.get(&"missing"), None);
//! ```
//!
//! ## Features
//!
//! - `hashbrown` (default): use `hashbrown` for the index.
//! - `concurrent` (default): [`ConcurrentLruCache`] via `parking_lot`.
//! - `std`: implement `std::error::Error` for [`CacheError`].
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: construction at `debug`,
//! evictions and clears at `trace`. Install any `log` backend to see them.
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`entry`]: Cache entry type
//! - [`config`]: Configuration structure
//! - [`metrics`]: Metrics collection for cache monitoring
//! - [`error`]: Construction errors
//! - [`concurrent`]: Thread-safe cache (requires `concurrent` feature)

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Cache entry type.
///
/// Provides `Entry<K, V>`, which holds a key, its value, a per-entry hit
/// count and the entry's position in the recency list.
pub mod entry;

/// Arena-backed doubly linked recency list.
///
/// **Note**: This module is internal infrastructure. Use the cache types
/// instead.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Construction errors.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions and evictions, reported through the
/// [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

/// Concurrent cache implementations.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use entry::Entry;
pub use error::CacheError;
pub use lru::LruCache;
pub use metrics::CacheMetrics;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
