//! Formatter cache statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for cache operations.
///
/// All counters are atomic and can be safely read from multiple threads.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups that found a stored formatter.
    hits: AtomicU64,
    /// Lookups that found nothing.
    misses: AtomicU64,
    /// Formatters built by the cache on a miss.
    constructions: AtomicU64,
    /// Explicit `set` calls.
    sets: AtomicU64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_construction(&self) {
        self.constructions.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_set(&self) {
        self.sets.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn constructions(&self) -> u64 {
        self.constructions.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sets(&self) -> u64 {
        self.sets.load(Ordering::Relaxed)
    }

    /// Fraction of lookups that were hits, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);

        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_construction();
        stats.record_set();

        assert_eq!(stats.hits(), 3);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.constructions(), 1);
        assert_eq!(stats.sets(), 1);
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
