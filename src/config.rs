//! Cache Configuration
//!
//! Configuration for the LRU cache front-ends. Fields are public, so a config
//! is built with a plain struct literal:
//!
//! ```
//! use recency_cache::config::LruCacheConfig;
//! use recency_cache::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None).unwrap();
//! assert_eq!(cache.cap().get(), 1000);
//! ```
//!
//! The same config drives both [`LruCache`](crate::LruCache) and
//! `ConcurrentLruCache`: the concurrent cache guards a single segment, so
//! there is no segment count to tune.
//!
//! # Sizing
//!
//! `capacity` is an entry count and any positive value is accepted; storage
//! is reserved lazily, so a large bound costs nothing until it fills. Eviction
//! is by recency only, so the memory footprint of a full cache is roughly
//! `capacity × (size_of::<K>() * 2 + size_of::<V>() + ~48)` bytes:
//! each key is stored once in the index and once in its entry.

use crate::error::{CacheError, Result};
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries. Must be greater than zero;
///   constructors reject `0` with [`CacheError::InvalidCapacity`].
///
/// # Examples
///
/// ```
/// use recency_cache::config::LruCacheConfig;
/// use recency_cache::{CacheError, LruCache};
///
/// let ok: Result<LruCache<&str, u32>, _> = LruCache::init(LruCacheConfig { capacity: 2 }, None);
/// assert!(ok.is_ok());
///
/// let err = LruCache::<&str, u32>::init(LruCacheConfig { capacity: 0 }, None).unwrap_err();
/// assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration for the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the capacity as a `NonZeroUsize`, or an error if it is zero.
    pub fn validated_capacity(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.capacity).ok_or(CacheError::InvalidCapacity {
            capacity: self.capacity,
        })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
