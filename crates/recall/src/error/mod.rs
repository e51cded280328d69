//! Error types for cache construction and lookup
//!
//! The taxonomy is intentionally small. [`CacheError::InvalidCapacity`] is
//! fatal to construction: there is no partially-constructed cache state, the
//! caller gets an error and no cache. [`CacheError::KeyNotFound`] is the
//! recoverable miss signal; the memoization adapter treats it as "compute and
//! store", other callers may propagate it or fall back as they see fit.
//!
//! Every other operation on a structurally valid cache is infallible by
//! design. A violated internal invariant is an implementation bug surfaced by
//! debug assertions, never a runtime error.

use thiserror::Error;

/// Convenience alias for cache operations that can fail.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors produced by cache construction and lookup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// A bounded cache was requested with a capacity of zero.
    #[error("invalid cache capacity: {0} (bounded caches require at least 1 entry)")]
    InvalidCapacity(usize),

    /// The requested key is not present in the cache.
    #[error("key not found in cache")]
    KeyNotFound,
}

impl CacheError {
    /// Returns `true` for the recoverable cache-miss signal.
    ///
    /// Useful when a caller funnels several cache interactions through one
    /// error path and only wants to recompute on an actual miss.
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the error module.
    use super::*;

    /// Validates `CacheError` display formatting for both variants.
    ///
    /// Assertions:
    /// - Ensures the `InvalidCapacity` message names the rejected value.
    /// - Ensures the `KeyNotFound` message uses the expected phrase.
    #[test]
    fn test_error_display() {
        let invalid = CacheError::InvalidCapacity(0);
        assert!(invalid.to_string().contains("invalid cache capacity: 0"));

        let missing = CacheError::KeyNotFound;
        assert!(missing.to_string().contains("key not found"));
    }

    /// Validates `CacheError::is_miss` behavior for the miss classification
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `CacheError::KeyNotFound.is_miss()` evaluates to true.
    /// - Ensures `!CacheError::InvalidCapacity(0).is_miss()` evaluates to true.
    #[test]
    fn test_is_miss_classification() {
        assert!(CacheError::KeyNotFound.is_miss());
        assert!(!CacheError::InvalidCapacity(0).is_miss());
    }

    /// Validates that `CacheError` values compare by variant and payload.
    ///
    /// Assertions:
    /// - Confirms `CacheError::InvalidCapacity(0)` equals itself.
    /// - Ensures differing payloads compare unequal.
    #[test]
    fn test_error_equality() {
        assert_eq!(CacheError::InvalidCapacity(0), CacheError::InvalidCapacity(0));
        assert_ne!(CacheError::InvalidCapacity(0), CacheError::KeyNotFound);
    }
}
