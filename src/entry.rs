//! Cache Entry Type
//!
//! An [`Entry`] is one cached mapping: the key, the current value, a per-entry
//! hit counter and the two positional links that place it in the recency
//! list.
//!
//! # Memory Layout
//!
//! - `key: K` - user's key type, immutable after creation
//! - `value: V` - user's value type, overwritten in place by `put`
//! - `hit_count: u64` - 8 bytes
//! - `prev`, `next: Option<Handle>` - `Option<usize>`-sized each
//!
//! Links are arena handles rather than pointers, so an entry can be moved
//! around the list without any `unsafe` code. Entries are only ever created
//! and linked by the recency list; users observe them through
//! [`LruCache::entries`](crate::LruCache::entries).

use crate::list::Handle;
use core::fmt;

/// One cached key/value pair together with its recency links.
pub struct Entry<K, V> {
    key: K,
    pub(crate) value: V,
    hit_count: u64,
    /// Neighbour toward the LRU end, `None` for the head.
    pub(crate) prev: Option<Handle>,
    /// Neighbour toward the MRU end, `None` for the tail.
    pub(crate) next: Option<Handle>,
}

impl<K, V> Entry<K, V> {
    /// Creates an unlinked entry with a zero hit count.
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            hit_count: 0,
            prev: None,
            next: None,
        }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns how many successful lookups this entry has served.
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }

    /// Replaces the value, returning the previous one.
    #[inline]
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning the key and value.
    #[inline]
    pub(crate) fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("hit_count", &self.hit_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::format;

    #[test]
    fn test_new_entry() {
        let entry = Entry::new("key", 42);
        assert_eq!(*entry.key(), "key");
        assert_eq!(*entry.value(), 42);
        assert_eq!(entry.hit_count(), 0);
        assert!(entry.prev.is_none());
        assert!(entry.next.is_none());
    }

    #[test]
    fn test_record_hit() {
        let mut entry = Entry::new("key", 42);
        entry.record_hit();
        entry.record_hit();
        assert_eq!(entry.hit_count(), 2);
    }

    #[test]
    fn test_replace_value_keeps_hits() {
        let mut entry = Entry::new("key", 1);
        entry.record_hit();
        assert_eq!(entry.replace_value(2), 1);
        assert_eq!(*entry.value(), 2);
        assert_eq!(entry.hit_count(), 1);
        assert_eq!(entry.into_parts(), ("key", 2));
    }

    #[test]
    fn test_debug_impl() {
        let entry = Entry::new("key", 42);
        let debug_str = format!("{:?}", entry);
        assert!(debug_str.contains("Entry"));
        assert!(debug_str.contains("key"));
        assert!(debug_str.contains("42"));
    }
}
