//! Memoization over the cache contract
//!
//! [`Memo`] wraps a compute function together with an explicit result store:
//! on a hit the stored value is returned without recomputation, on a miss
//! the value is computed exactly once, stored, and returned. The store is
//! injected (or built from a [`Capacity`]) rather than captured in
//! process-wide state, so callers control its lifecycle and tests stay
//! isolated.
//!
//! How a function call becomes a key is deliberately outside this module's
//! contract. Callers derive a deterministic `Eq + Hash` key from the
//! arguments they consider significant and pass it to [`Memo::call`].
//!
//! # Examples
//!
//! ```
//! use recall::{Capacity, Memo};
//!
//! let mut square = Memo::new(Capacity::unbounded(), |n: &i64| n * n);
//!
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144); // hit: not recomputed
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{Capacity, LruCache};

/// Mapping-like store backing a [`Memo`].
///
/// The two variants mirror the two recognized configurations: a bounded LRU
/// cache that discards the least recently used result under memory pressure,
/// or a plain map that keeps every result for the lifetime of the store.
#[derive(Debug)]
pub enum MemoStore<K, V>
where
    K: Eq + Hash,
{
    /// Bounded storage; least recently used results are evicted.
    Bounded(LruCache<K, V>),

    /// Unconditional retention; nothing is ever evicted.
    Unbounded(HashMap<K, V>),
}

impl<K, V> MemoStore<K, V>
where
    K: Eq + Hash,
{
    /// Builds a store for the given capacity configuration.
    pub fn new(capacity: Capacity) -> Self {
        match capacity {
            Capacity::Bounded(limit) => Self::Bounded(LruCache::new(limit)),
            Capacity::Unbounded => Self::Unbounded(HashMap::new()),
        }
    }

    /// Returns `true` when a result is stored under `key`.
    pub fn contains(&self, key: &K) -> bool {
        match self {
            Self::Bounded(cache) => cache.contains(key),
            Self::Unbounded(map) => map.contains_key(key),
        }
    }

    /// Looks up the stored result for `key`. In the bounded variant a hit
    /// promotes the entry, keeping frequently used results alive.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self {
            Self::Bounded(cache) => cache.get(key).ok(),
            Self::Unbounded(map) => map.get(key),
        }
    }

    /// Stores `value` under `key`, replacing any previous result.
    pub fn insert(&mut self, key: K, value: V) {
        match self {
            Self::Bounded(cache) => {
                let _ = cache.put(key, value);
            }
            Self::Unbounded(map) => {
                map.insert(key, value);
            }
        }
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        match self {
            Self::Bounded(cache) => cache.len(),
            Self::Unbounded(map) => map.len(),
        }
    }

    /// Returns `true` when nothing is stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute-once wrapper mapping precomputed call keys to cached results.
pub struct Memo<K, V, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> V,
{
    store: MemoStore<K, V>,
    compute: F,
}

impl<K, V, F> Memo<K, V, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> V,
{
    /// Creates a memoizer with a store built from `capacity`.
    pub fn new(capacity: Capacity, compute: F) -> Self {
        Self { store: MemoStore::new(capacity), compute }
    }

    /// Creates a memoizer over an injected, possibly pre-populated store.
    pub fn with_store(store: MemoStore<K, V>, compute: F) -> Self {
        Self { store, compute }
    }

    /// Returns the result for `key`, computing and storing it on a miss.
    ///
    /// The compute function runs exactly once per distinct key while the
    /// result remains stored; a result evicted from a bounded store is
    /// recomputed on next use.
    pub fn call(&mut self, key: K) -> V
    where
        V: Clone,
    {
        if let Some(value) = self.store.get(&key) {
            return value.clone();
        }

        let value = (self.compute)(&key);
        self.store.insert(key, value.clone());
        value
    }

    /// Read-only view of the backing store.
    pub fn store(&self) -> &MemoStore<K, V> {
        &self.store
    }
}
