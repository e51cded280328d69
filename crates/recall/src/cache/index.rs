//! Key-to-slot lookup for the cache
//!
//! [`KeyIndex`] gives the orchestrator `O(1)` membership tests and slot
//! lookups. Keys are held as `Rc<K>` shared with the recency list's nodes,
//! so each key is stored exactly once no matter how often it is looked up.
//!
//! `insert` overwrites silently; the orchestrator is responsible for
//! detaching the previous slot first. That responsibility never leaks out of
//! `LruCache::put`, which has a single code path per key-presence branch.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// Mapping from key to the recency list slot holding its entry.
#[derive(Debug)]
pub(crate) struct KeyIndex<K> {
    map: HashMap<Rc<K>, usize>,
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash,
{
    /// Creates an empty index with room for `capacity` keys.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { map: HashMap::with_capacity(capacity) }
    }

    /// Returns `true` when `key` has a live entry.
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Looks up the slot for `key`, if any.
    pub(crate) fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    /// Maps `key` to `slot`, silently replacing any previous mapping.
    pub(crate) fn insert(&mut self, key: Rc<K>, slot: usize) {
        self.map.insert(key, slot);
    }

    /// Deletes the mapping for `key`, returning the slot it pointed at.
    /// Removing an absent key is not an error.
    pub(crate) fn remove(&mut self, key: &K) -> Option<usize> {
        self.map.remove(key)
    }

    /// Number of mapped keys.
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// Drops all mappings, keeping allocated storage.
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
