//! Concurrent Cache Implementations
//!
//! Thread-safe front-ends over the single-threaded cache core.
//!
//! # Architecture
//!
//! A concurrent cache wraps exactly one segment (index + recency list +
//! counters) in one `parking_lot::Mutex`. Every operation, reads included,
//! takes that lock once and does all of its work inside it:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              ConcurrentLruCache              │
//! │  ┌────────────────────────────────────────┐  │
//! │  │                 Mutex                  │  │
//! │  │  ┌─────────┐  ┌──────────────┐  ┌───┐  │  │
//! │  │  │  index  │  │ recency list │  │ # │  │  │
//! │  │  └─────────┘  └──────────────┘  └───┘  │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The index and the list are never locked separately, so no caller can see
//! a key in the index whose list node is mid-splice.
//!
//! ## Why one lock and not lock striping?
//!
//! Partitioning keys across independently locked segments would make recency
//! order per-segment: a key could be evicted while another segment still held
//! older entries. A single lock keeps eviction globally least-recently-used
//! at the cost of throughput under heavy contention. Every critical section
//! is O(1), so the lock is held briefly.
//!
//! ## Why Mutex instead of RwLock?
//!
//! `get()` moves the entry to the MRU end and bumps counters, so every access
//! is a write. An `RwLock` would hand out write locks anyway.
//!
//! # Sharing
//!
//! Construct the cache once and pass an `Arc` to its consumers:
//!
//! ```
//! use recency_cache::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache: Arc<ConcurrentLruCache<String, u64>> =
//!     Arc::new(ConcurrentLruCache::new(1024).unwrap());
//!
//! let worker = {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         cache.put("answer".to_string(), 42);
//!     })
//! };
//! worker.join().unwrap();
//!
//! assert_eq!(cache.get("answer"), Some(42));
//! ```

mod lru;

pub use self::lru::ConcurrentLruCache;
