//! Capacity configuration
//!
//! A store is either bounded, with LRU eviction at a fixed limit, or
//! unbounded, retaining everything forever. The two are distinct typed
//! variants rather than a nullable size, so opting into unbounded memory
//! growth is a visible decision at the construction site.

use std::num::NonZeroUsize;

use crate::error::{CacheError, CacheResult};

/// Construction-time capacity choice for a memoization store.
///
/// # Examples
///
/// ```
/// use recall::{CacheError, Capacity};
///
/// let bounded = Capacity::bounded(128)?;
/// assert!(bounded.is_bounded());
/// assert_eq!(bounded.limit(), Some(128));
///
/// let unbounded = Capacity::unbounded();
/// assert_eq!(unbounded.limit(), None);
///
/// assert_eq!(Capacity::bounded(0), Err(CacheError::InvalidCapacity(0)));
/// # Ok::<(), CacheError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capacity {
    /// Fixed entry limit; the least recently used entry is evicted when an
    /// insertion would exceed it.
    Bounded(NonZeroUsize),

    /// Unconditional retention. Nothing is ever evicted; unlimited memory
    /// growth is the caller's explicit tradeoff.
    #[default]
    Unbounded,
}

impl Capacity {
    /// Bounded capacity with `limit` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `limit` is zero.
    pub fn bounded(limit: usize) -> CacheResult<Self> {
        NonZeroUsize::new(limit)
            .map(Self::Bounded)
            .ok_or(CacheError::InvalidCapacity(limit))
    }

    /// Unconditional retention, the "no bound specified" configuration.
    pub fn unbounded() -> Self {
        Self::Unbounded
    }

    /// Returns `true` for the bounded variant.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    /// The entry limit, or `None` for unbounded retention.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Bounded(limit) => Some(limit.get()),
            Self::Unbounded => None,
        }
    }
}
