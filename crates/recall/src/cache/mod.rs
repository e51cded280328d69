//! Fixed-capacity LRU caching
//!
//! Two collaborating structures make up the cache. The recency list keeps a
//! mutable total order over live entries from most to least recently used;
//! the key index maps each key to its slot in that order. [`LruCache`]
//! composes the two and keeps them mutually consistent, giving `O(1)`
//! amortized lookup, insertion, and eviction.
//!
//! # Features
//!
//! - **Bounded**: the capacity is fixed at construction and never exceeded;
//!   an overflowing insertion evicts exactly the least recently used entry
//! - **Promoting reads**: `get` marks the entry most recently used; `peek`
//!   and `contains` inspect without touching the order
//! - **Ordered traversal**: `iter` and `keys` walk entries MRU to LRU,
//!   lazily and restartably
//! - **Statistics**: hit/miss/insert/eviction counters snapshot via
//!   [`LruCache::stats`]
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use recall::cache::LruCache;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(3).expect("capacity must be > 0"));
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! // Reading "a" promotes it, so "b" is now the eviction candidate.
//! assert_eq!(cache.get(&"a"), Ok(&1));
//! cache.put("d", 4);
//! assert!(!cache.contains(&"b"));
//!
//! let order: Vec<_> = cache.keys().copied().collect();
//! assert_eq!(order, vec!["d", "a", "c"]);
//! ```

mod config;
mod core;
mod index;
mod list;
mod stats;

// Re-export public API
pub use core::{Iter, Keys, LruCache};

pub use config::Capacity;
pub use stats::CacheStats;
