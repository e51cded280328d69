//! Cache statistics and operation counters
//!
//! [`CacheStats`] is a point-in-time snapshot of cache activity for
//! monitoring and diagnostics. The internal counters are plain integers: the
//! cache is single-owner by contract, so there is nothing to synchronize.

use serde::Serialize;

/// Snapshot of cache activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Current number of entries.
    pub size: usize,

    /// Maximum allowed entries (`None` for unbounded stores).
    pub capacity: Option<usize>,

    /// Successful `get` operations.
    pub hits: u64,

    /// Failed `get` operations.
    pub misses: u64,

    /// `put` operations, counting both fresh inserts and in-place updates.
    pub inserts: u64,

    /// Entries evicted to enforce the capacity bound.
    pub evictions: u64,
}

impl CacheStats {
    /// Hit rate over all accesses, `0.0` when nothing was accessed yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Miss rate over all accesses.
    pub fn miss_rate(&self) -> f64 {
        1.0 - self.hit_rate()
    }

    /// Fraction of the capacity in use, `None` for unbounded stores.
    pub fn fill_ratio(&self) -> Option<f64> {
        self.capacity.map(|capacity| {
            if capacity == 0 {
                0.0
            } else {
                self.size as f64 / capacity as f64
            }
        })
    }

    /// Total access operations (hits + misses).
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Structured representation for logging pipelines and dashboards,
    /// including the derived rates.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "size": self.size,
            "capacity": self.capacity,
            "hits": self.hits,
            "misses": self.misses,
            "inserts": self.inserts,
            "evictions": self.evictions,
            "hit_rate": self.hit_rate(),
            "miss_rate": self.miss_rate(),
            "total_accesses": self.total_accesses(),
            "fill_ratio": self.fill_ratio(),
        })
    }
}

/// Operation counters owned by the cache.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: u64,
    misses: u64,
    inserts: u64,
    evictions: u64,
}

impl Counters {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Point-in-time snapshot combined with the current size and capacity.
    pub(crate) fn snapshot(&self, size: usize, capacity: Option<usize>) -> CacheStats {
        CacheStats {
            size,
            capacity,
            hits: self.hits,
            misses: self.misses,
            inserts: self.inserts,
            evictions: self.evictions,
        }
    }

    /// Resets every counter to zero.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache statistics.
    use super::*;

    /// Validates `CacheStats::default` behavior for the empty snapshot
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms every counter starts at zero.
    /// - Confirms `hit_rate()` equals `0.0` and `miss_rate()` equals `1.0`.
    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.size, 0);
        assert!(stats.capacity.is_none());
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 1.0);
        assert_eq!(stats.total_accesses(), 0);
    }

    /// Validates the rate calculation scenario.
    ///
    /// Assertions:
    /// - Ensures `(stats.hit_rate() - 0.8).abs() < 1e-10` evaluates to true.
    /// - Ensures `(stats.miss_rate() - 0.2).abs() < 1e-10` evaluates to true.
    /// - Confirms `stats.total_accesses()` equals `100`.
    #[test]
    fn test_rate_calculation() {
        let stats = CacheStats { hits: 80, misses: 20, ..Default::default() };

        assert!((stats.hit_rate() - 0.8).abs() < 1e-10);
        assert!((stats.miss_rate() - 0.2).abs() < 1e-10);
        assert_eq!(stats.total_accesses(), 100);
    }

    /// Validates the fill ratio scenario.
    ///
    /// Assertions:
    /// - Confirms `fill_ratio()` equals `Some(0.5)` for a half-full cache.
    /// - Confirms `fill_ratio()` equals `None` without a capacity.
    #[test]
    fn test_fill_ratio() {
        let bounded = CacheStats { size: 5, capacity: Some(10), ..Default::default() };
        assert_eq!(bounded.fill_ratio(), Some(0.5));

        let unbounded = CacheStats { size: 5, capacity: None, ..Default::default() };
        assert_eq!(unbounded.fill_ratio(), None);
    }

    /// Validates `Counters` recording for the scripted workload scenario.
    ///
    /// Assertions:
    /// - Confirms the snapshot reflects each recorded operation.
    /// - Confirms `reset` returns every counter to zero.
    #[test]
    fn test_counters_record_and_reset() {
        let mut counters = Counters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        counters.record_insert();
        counters.record_eviction();

        let stats = counters.snapshot(3, Some(8));
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.size, 3);
        assert_eq!(stats.capacity, Some(8));

        counters.reset();
        let cleared = counters.snapshot(0, Some(8));
        assert_eq!(cleared.hits, 0);
        assert_eq!(cleared.misses, 0);
        assert_eq!(cleared.inserts, 0);
        assert_eq!(cleared.evictions, 0);
    }

    /// Validates `CacheStats::to_json` behavior for the structured export
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms raw counters appear under their field names.
    /// - Confirms the derived `hit_rate` is included.
    #[test]
    fn test_to_json_includes_derived_rates() {
        let stats =
            CacheStats { size: 2, capacity: Some(4), hits: 3, misses: 1, ..Default::default() };
        let json = stats.to_json();

        assert_eq!(json["size"], 2);
        assert_eq!(json["capacity"], 4);
        assert_eq!(json["hits"], 3);
        assert_eq!(json["misses"], 1);
        assert_eq!(json["hit_rate"], 0.75);
        assert_eq!(json["fill_ratio"], 0.5);
    }
}
