//! Arena-backed doubly linked recency list.
//!
//! Entries live in a `Vec` of slots and refer to each other through
//! [`Handle`]s (slot indices). The list is ordered from `head` (least recently
//! used) to `tail` (most recently used). Slots released by `pop_front` or
//! `remove` are recycled through a free list, so a full cache that evicts one
//! entry per insertion never grows the arena.
//!
//! All operations are O(1); none of them walk the list except [`Iter`].

extern crate alloc;

use crate::entry::Entry;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

/// Upper bound on slots reserved up front. Larger caches grow their arena
/// and index as entries arrive.
pub(crate) const PREALLOC_LIMIT: usize = 1024;

/// Position of an entry in a [`RecencyList`] arena.
///
/// A handle stays valid until the entry it names is removed from the list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Handle(usize);

/// A doubly linked list of [`Entry`] values stored in a slot arena.
///
/// # Examples
///
/// ```ignore
/// use recency_cache::list::RecencyList;
/// use core::num::NonZeroUsize;
///
/// let mut list = RecencyList::new(NonZeroUsize::new(3).unwrap());
/// let a = list.push_back("a", 1);
/// let _b = list.push_back("b", 2);
///
/// // "a" becomes the most recently used entry
/// list.promote(a);
/// assert_eq!(list.pop_front().unwrap().into_parts(), ("b", 2));
/// ```
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,
    /// Least recently used entry.
    head: Option<Handle>,
    /// Most recently used entry.
    tail: Option<Handle>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// Creates an empty list with room for up to `cap` entries (at most
    /// [`PREALLOC_LIMIT`]) before reallocating.
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        Self {
            slots: Vec::with_capacity(cap.get().min(PREALLOC_LIMIT)),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> Option<Handle> {
        self.head
    }

    #[cfg(test)]
    pub(crate) fn tail(&self) -> Option<Handle> {
        self.tail
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> Option<&Entry<K, V>> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut Entry<K, V>> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Appends a new entry at the MRU end and returns its handle.
    pub(crate) fn push_back(&mut self, key: K, value: V) -> Handle {
        let entry = Entry::new(key, value);
        let handle = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                Handle(idx)
            }
            None => {
                self.slots.push(Some(entry));
                Handle(self.slots.len() - 1)
            }
        };
        self.link_back(handle);
        self.len += 1;
        handle
    }

    /// Moves an entry to the MRU end. No-op if it is already the tail.
    pub(crate) fn promote(&mut self, handle: Handle) {
        if self.tail == Some(handle) || self.get(handle).is_none() {
            return;
        }
        self.unlink(handle);
        self.link_back(handle);
    }

    /// Unlinks and returns the LRU entry.
    pub(crate) fn pop_front(&mut self) -> Option<Entry<K, V>> {
        let head = self.head?;
        self.remove(head)
    }

    /// Unlinks the entry at `handle` and releases its slot.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<Entry<K, V>> {
        self.get(handle)?;
        self.unlink(handle);
        let entry = self.slots[handle.0].take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(entry)
    }

    /// Drops every entry. Allocated slot storage is kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from the LRU end to the MRU end.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Splices the entry out, reconnecting its neighbours and fixing `head`
    /// and `tail`. The entry's own links are cleared.
    fn unlink(&mut self, handle: Handle) {
        let (prev, next) = match self.get_mut(handle) {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };

        match prev.and_then(|p| self.get_mut(p)) {
            Some(prev_entry) => prev_entry.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.get_mut(n)) {
            Some(next_entry) => next_entry.prev = prev,
            None => self.tail = prev,
        }
    }

    /// Attaches an unlinked entry after the current tail.
    fn link_back(&mut self, handle: Handle) {
        let old_tail = self.tail;
        if let Some(entry) = self.get_mut(handle) {
            entry.prev = old_tail;
            entry.next = None;
        }
        match old_tail.and_then(|t| self.get_mut(t)) {
            Some(tail_entry) => tail_entry.next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
    }
}

impl<K, V> fmt::Debug for RecencyList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyList")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Iterator over list entries from least to most recently used.
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    next: Option<Handle>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.next?)?;
        self.next = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
