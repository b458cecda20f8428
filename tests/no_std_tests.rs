#![no_std]
extern crate alloc;
extern crate recency_cache;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use recency_cache::config::LruCacheConfig;
use recency_cache::{CacheError, CacheMetrics, LruCache};

fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig::new(cap), None).unwrap()
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // key1 was promoted before key2, so key1 is now least recently used
    cache.put(key3.clone(), 3);

    assert!(cache.get(&key1).is_none());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_borrowed_lookup_in_no_std() {
    let mut cache = make_lru(4);
    cache.put(String::from("alpha"), 1);

    // &str lookups against String keys
    assert_eq!(cache.get("alpha"), Some(&1));
    assert!(cache.contains("alpha"));
    assert_eq!(cache.remove("alpha"), Some(1));
    assert!(cache.is_empty());
}

#[test]
fn test_counters_in_no_std() {
    let mut cache = make_lru(3);
    cache.put(String::from("a"), 1);
    cache.get("a");
    cache.get("b");
    cache.get("c");

    assert_eq!(cache.hit_count(), 1);
    assert_eq!(cache.miss_count(), 2);

    let metrics = cache.metrics();
    assert_eq!(metrics.get("cache_hits"), Some(&1.0));
    assert_eq!(metrics.get("cache_misses"), Some(&2.0));
    assert_eq!(cache.algorithm_name(), "LRU");
}

#[test]
fn test_zero_capacity_in_no_std() {
    let err = LruCache::<String, u32>::new(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });
    assert_eq!(
        format!("{}", err),
        "invalid cache capacity: 0 (must be > 0)"
    );
}

#[test]
fn test_complex_types_in_no_std() {
    // Test with more complex types that require alloc
    let mut cache = make_lru(2);

    let key1 = Vec::<u8>::from([1, 2, 3]);
    let value1 = Vec::<i32>::from([10, 20, 30]);

    let key2 = Vec::<u8>::from([4, 5, 6]);
    let value2 = Vec::<i32>::from([40, 50, 60]);

    cache.put(key1.clone(), value1.clone());
    cache.put(key2.clone(), value2.clone());

    assert_eq!(*cache.get(&key1).unwrap(), value1);
    assert_eq!(*cache.get(&key2).unwrap(), value2);

    // Slice lookups against Vec keys
    assert_eq!(cache.peek(&[1u8, 2, 3][..]), Some(&value1));
}

#[test]
fn test_iteration_order_in_no_std() {
    let mut cache = make_lru(3);
    for k in ["x", "y", "z"] {
        cache.put(String::from(k), k.len());
    }
    cache.get("x");

    let order: Vec<&str> = cache.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(order, ["y", "z", "x"]);
}
