//! Concurrent LRU Cache Implementation
//!
//! A thread-safe LRU cache. This is the multi-threaded counterpart to
//! [`LruCache`](crate::LruCache) and shares its algorithm: both drive the
//! same internal segment, here behind a `parking_lot::Mutex`.
//!
//! # Performance Characteristics
//!
//! | Metric | Value |
//! |--------|-------|
//! | Get/Put/Remove | O(1) under one lock acquisition |
//! | LRU ordering | Global (single segment) |
//! | Memory overhead | one `Mutex` on top of the single-threaded cache |
//!
//! # When to Use
//!
//! **Use ConcurrentLruCache when:**
//! - Multiple threads need the same cache
//! - Eviction must follow one global recency order
//!
//! **Consider alternatives when:**
//! - Single-threaded access only → use `LruCache` and skip the lock
//!
//! # Example
//!
//! ```
//! use recency_cache::ConcurrentLruCache;
//! use recency_cache::config::LruCacheConfig;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::init(LruCacheConfig { capacity: 10_000 }, None).unwrap());
//!
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for j in 0..1000 {
//!             cache.put(format!("key-{}-{}", i, j), j);
//!         }
//!     })
//! }).collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 4000);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::lru::{DefaultHashBuilder, LruSegment};
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

/// A thread-safe LRU cache guarded by a single lock.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq` (`Clone` for `put`).
/// - `V`: Value type. `get` clones the value out; use
///   [`get_with`](Self::get_with) to avoid the clone.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// `ConcurrentLruCache` is `Send + Sync` whenever `K`, `V` and `S` are `Send`,
/// and is normally shared through an `Arc`.
///
/// # Example
///
/// ```
/// use recency_cache::ConcurrentLruCache;
///
/// let cache = ConcurrentLruCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Some(1));
/// cache.put("c", 3);
///
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.hit_count(), 1);
/// assert_eq!(cache.miss_count(), 1);
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent LRU cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::init(LruCacheConfig::new(capacity), None)
    }

    /// Creates a new concurrent LRU cache from a configuration with an optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Result<Self> {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a concurrent LRU cache with a custom hash builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Result<Self> {
        Ok(Self {
            segment: Mutex::new(LruSegment::init(config, hash_builder)?),
        })
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> NonZeroUsize {
        self.segment.lock().cap()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Retrieves a clone of the value and marks the entry most recently used.
    ///
    /// A miss is counted and reported as `None`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Retrieves a value and applies `f` to it while holding the lock.
    ///
    /// Counts and promotes exactly like [`get`](Self::get), without cloning.
    ///
    /// # Example
    ///
    /// ```
    /// use recency_cache::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(8).unwrap();
    /// cache.put("greeting", String::from("hello world"));
    /// assert_eq!(cache.get_with("greeting", |v: &String| v.len()), Some(11));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Applies `f` to a mutable reference to the value while holding the lock.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.segment.lock().get_mut(key).map(f)
    }

    /// Returns a clone of the value without touching recency or counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.segment.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` is cached. Does not touch recency or counters.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Returns how many hits the entry for `key` has served.
    pub fn entry_hits<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().entry_hits(key)
    }

    /// Removes a key from the cache, returning its value if present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Removes all entries. Counters are kept.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }

    /// Total number of successful lookups.
    pub fn hit_count(&self) -> u64 {
        self.segment.lock().metrics().hits()
    }

    /// Total number of lookups for absent keys.
    pub fn miss_count(&self) -> u64 {
        self.segment.lock().metrics().misses()
    }

    /// Total number of entries evicted for capacity.
    pub fn eviction_count(&self) -> u64 {
        self.segment.lock().metrics().evictions()
    }

    /// Returns the cached keys from least to most recently used.
    ///
    /// The snapshot is taken under one lock acquisition, so it reflects a
    /// single consistent state of the cache.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.segment
            .lock()
            .iter()
            .map(|(k, _)| k.clone())
            .collect()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts a key-value pair and marks it most recently used.
    ///
    /// An existing key is overwritten in place. A new key in a full cache
    /// first evicts the least recently used entry, which is returned.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.segment.lock().put(key, value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("segment", &*self.segment.lock())
            .finish()
    }
}
