//! Fixed-capacity LRU caching and explicit memoization.
//!
//! The core of this crate is [`LruCache`], a single-owner key/value store
//! bounded by a maximum entry count. Lookup, insertion, and eviction are all
//! `O(1)` amortized; whenever an insertion would exceed the capacity, the
//! least recently used entry is discarded. On top of that contract sits
//! [`Memo`], a thin adapter that maps precomputed call keys to cached results
//! and computes each missing value exactly once.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use recall::{CacheError, LruCache};
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).expect("capacity must be > 0"));
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Ok(&1));
//!
//! cache.put("c", 3); // "b" is now the least recently used entry; evicted
//! assert_eq!(cache.get(&"b"), Err(CacheError::KeyNotFound));
//! ```
//!
//! Memoization with an explicit, injected store:
//!
//! ```
//! use recall::{Capacity, Memo};
//!
//! let mut doubled = Memo::new(Capacity::unbounded(), |n: &u64| n * 2);
//! assert_eq!(doubled.call(21), 42);
//! assert_eq!(doubled.call(21), 42); // served from the store, not recomputed
//! ```
//!
//! # Thread Safety
//!
//! The cache is deliberately single-owner: mutating operations take
//! `&mut self`, there is no internal locking, and the types are neither
//! `Send` nor `Sync`. Callers that need cross-thread sharing must supply
//! external mutual exclusion around every operation.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod cache;
pub mod error;
pub mod memo;

// Re-export commonly used types for convenience
// ------------------------------
pub use cache::{CacheStats, Capacity, Iter, Keys, LruCache};
pub use error::{CacheError, CacheResult};
pub use memo::{Memo, MemoStore};
