//! Least Recently Used (LRU) Cache Implementation
//!
//! A fixed-capacity LRU cache with O(1) `get`, `put` and `remove`.
//!
//! # Algorithm
//!
//! Two structures are kept in lockstep:
//!
//! - an **index** (`HashMap<K, Handle>`) for O(1) membership and lookup, and
//! - a **recency list** ([`RecencyList`]) ordering the same entries from least
//!   to most recently used.
//!
//! ```text
//!   index                      recency list
//!  ┌──────┬────────┐   head (LRU)                        tail (MRU)
//!  │ "a"  │ slot 2 │──▶ ┌─────┐ ──▶ ┌─────┐ ──▶ ┌─────┐
//!  │ "b"  │ slot 0 │──▶ │ "b" │ ◀── │ "c" │ ◀── │ "a" │
//!  │ "c"  │ slot 1 │──▶ └─────┘     └─────┘     └─────┘
//!  └──────┴────────┘
//! ```
//!
//! A successful lookup or an overwriting `put` promotes the entry to the tail.
//! Inserting a new key into a full cache first evicts the head.
//!
//! # Performance Characteristics
//!
//! - Get / Put / Remove: O(1)
//! - Space: O(len). At most 1024 slots are reserved at construction; beyond
//!   that the index and arena grow as entries arrive. Slots freed by eviction
//!   are reused, so a full cache does not allocate on `put`, and overwriting
//!   an existing key never allocates.
//!
//! # Thread Safety
//!
//! [`LruCache`] is not synchronized. Use
//! [`ConcurrentLruCache`](crate::ConcurrentLruCache) (feature `concurrent`)
//! to share a cache between threads.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::list::{self, Handle, RecencyList, PREALLOC_LIMIT};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
pub use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Index, recency list and counters for one cache.
///
/// All of the algorithm lives here; [`LruCache`] and
/// [`ConcurrentLruCache`](crate::ConcurrentLruCache) only decide how callers
/// reach it.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    cap: NonZeroUsize,
    list: RecencyList<K, V>,
    map: HashMap<K, Handle, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn init(config: LruCacheConfig, hash_builder: S) -> Result<Self> {
        let cap = config.validated_capacity()?;
        log::debug!("creating LRU cache with capacity {}", cap);
        Ok(LruSegment {
            config,
            cap,
            list: RecencyList::new(cap),
            map: HashMap::with_capacity_and_hasher(cap.get().min(PREALLOC_LIMIT), hash_builder),
            metrics: LruCacheMetrics::new(),
        })
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    #[inline]
    pub(crate) fn config(&self) -> &LruCacheConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Looks up `key`, counting a hit or miss and promoting on a hit.
    fn touch<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&handle) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.metrics.core.record_hit();
        self.list.promote(handle);
        let entry = self.list.get_mut(handle)?;
        entry.record_hit();
        Some(entry)
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.touch(key).map(|entry| &entry.value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.touch(key).map(|entry| &mut entry.value)
    }

    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entry(key).map(Entry::value)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn entry_hits<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entry(key).map(Entry::hit_count)
    }

    fn entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = *self.map.get(key)?;
        self.list.get(handle)
    }

    /// Inserts or overwrites `key`.
    ///
    /// Returns the entry evicted to make room, if any.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if let Some(&handle) = self.map.get(&key) {
            if let Some(entry) = self.list.get_mut(handle) {
                entry.replace_value(value);
            }
            self.list.promote(handle);
            return None;
        }

        let evicted = if self.map.len() >= self.cap.get() {
            self.evict()
        } else {
            None
        };

        let handle = self.list.push_back(key.clone(), value);
        self.map.insert(key, handle);
        self.metrics.core.record_insertion();

        evicted
    }

    /// Removes the least recently used entry from both structures.
    fn evict(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_front()?;
        self.map.remove(entry.key());
        self.metrics.core.record_eviction();
        log::trace!(
            "evicted LRU entry ({} hits), {} evictions total",
            entry.hit_count(),
            self.metrics.evictions()
        );
        Some(entry.into_parts())
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        self.list.remove(handle).map(|entry| entry.into_parts().1)
    }

    pub(crate) fn clear(&mut self) {
        log::trace!("clearing {} entries", self.map.len());
        self.map.clear();
        self.list.clear();
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Checks that the index and the recency list describe the same entries.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.map.len(), self.list.len());
        assert!(self.list.len() <= self.cap.get());
        assert_eq!(self.list.head().is_none(), self.list.is_empty());
        let mut walked = 0;
        for entry in self.list.iter() {
            let handle = *self.map.get(entry.key()).expect("listed key missing from index");
            assert!(core::ptr::eq(self.list.get(handle).unwrap(), entry));
            walked += 1;
        }
        assert_eq!(walked, self.map.len());
    }
}

impl<K, V, S> core::fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.cap)
            .field("len", &self.map.len())
            .finish()
    }
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches capacity,
/// the least recently used entry is evicted to make room for new entries.
///
/// # Examples
///
/// ```
/// use recency_cache::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
///
/// assert_eq!(cache.hit_count(), 3);
/// assert_eq!(cache.miss_count(), 1);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: LruSegment<K, V, S>,
}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("segment", &self.segment)
            .finish()
    }
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::init(LruCacheConfig::new(capacity), None)
    }

    /// Creates a new LRU cache from a configuration and an optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Result<Self> {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with a custom hash builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Result<Self> {
        Ok(Self {
            segment: LruSegment::init(config, hash_builder)?,
        })
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.segment.cap()
    }

    /// Returns the configuration the cache was built from.
    #[inline]
    pub fn config(&self) -> &LruCacheConfig {
        self.segment.config()
    }

    /// Returns the number of entries currently cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A hit increments both the cache's hit counter and the entry's own hit
    /// count. A miss increments the miss counter and returns `None`.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Like [`get`](Self::get), but yields a mutable reference.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns the value for `key` without touching recency or counters.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.peek(key)
    }

    /// Returns `true` if `key` is cached. Does not touch recency or counters.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains(key)
    }

    /// Returns how many hits the entry for `key` has served.
    #[inline]
    pub fn entry_hits<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.entry_hits(key)
    }

    /// Removes `key`, returning its value if it was cached.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Removes every entry. Hit, miss and eviction counters are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }

    /// Total number of successful lookups.
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.segment.metrics().hits()
    }

    /// Total number of lookups for absent keys.
    #[inline]
    pub fn miss_count(&self) -> u64 {
        self.segment.metrics().misses()
    }

    /// Total number of entries evicted for capacity.
    #[inline]
    pub fn eviction_count(&self) -> u64 {
        self.segment.metrics().evictions()
    }

    /// Iterates over `(key, value)` pairs from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.segment.iter()
    }

    /// Iterates over whole entries from least to most recently used.
    ///
    /// Unlike [`iter`](Self::iter) this exposes each entry's hit count. Does
    /// not touch recency or counters.
    ///
    /// ```
    /// use recency_cache::LruCache;
    ///
    /// let mut cache = LruCache::new(4).unwrap();
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.get(&"a");
    ///
    /// let hits: Vec<_> = cache.entries().map(|e| (*e.key(), e.hit_count())).collect();
    /// assert_eq!(hits, [("b", 0), ("a", 1)]);
    /// ```
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.segment.list.iter(),
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts `value` under `key` and marks it most recently used.
    ///
    /// If `key` is already cached its value is overwritten in place. If the
    /// key is new and the cache is full, the least recently used entry is
    /// evicted first and returned.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.segment.put(key, value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries from least to most recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key(), entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> core::fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter").field("inner", &self.inner).finish()
    }
}

/// Iterator over whole cache entries from least to most recently used.
///
/// Created by [`LruCache::entries`].
pub struct Entries<'a, K, V> {
    inner: list::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> core::fmt::Debug for Entries<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entries").field("inner", &self.inner).finish()
    }
}
