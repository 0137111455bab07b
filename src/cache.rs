//! Formatter caching.
//!
//! Compiling a pattern is the expensive part of building a formatter, so
//! formatters are built once per pattern and shared. The cache is an ordinary
//! value: the host creates it, hands out references (or an `Arc`) and drops it
//! when done. Entries are never evicted; the key space is the host's own set
//! of pattern strings.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::PatternError;
use crate::formatter::DateFormatter;
use crate::options::FormatterOptions;
use crate::stats::CacheStats;
use crate::sync_map::SynchronizedMap;

/// Thread-safe map from pattern string to a shared formatter.
#[derive(Debug, Default)]
pub struct FormatterCache {
    formatters: SynchronizedMap<String, Arc<DateFormatter>>,
    options: FormatterOptions,
    stats: CacheStats,
}

impl FormatterCache {
    /// Create an empty cache whose formatters use `options`.
    pub fn new(options: FormatterOptions) -> Self {
        Self {
            formatters: SynchronizedMap::new(),
            options,
            stats: CacheStats::new(),
        }
    }

    /// Returns the stored formatter for `pattern`, if any. Never builds one.
    pub fn get(&self, pattern: &str) -> Option<Arc<DateFormatter>> {
        let found = self.formatters.get(pattern);
        if found.is_some() {
            self.stats.record_hit();
            trace!(pattern, "date formatter cache hit");
        } else {
            self.stats.record_miss();
        }
        found
    }

    /// Stores `formatter` under `pattern`, replacing any previous entry.
    pub fn set(&self, pattern: impl Into<String>, formatter: Arc<DateFormatter>) {
        self.stats.record_set();
        self.formatters.set(pattern.into(), formatter);
    }

    /// Number of stored patterns. Advisory under concurrent writers.
    pub fn size(&self) -> usize {
        self.formatters.len()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.formatters.contains_key(pattern)
    }

    /// Returns the formatter for `pattern`, compiling and storing it on a miss.
    ///
    /// Concurrent callers racing on a new pattern compile it once and all
    /// receive the same instance. An invalid pattern is reported to the
    /// caller and leaves the cache unchanged.
    pub fn formatter_for(&self, pattern: &str) -> Result<Arc<DateFormatter>, PatternError> {
        if let Some(formatter) = self.get(pattern) {
            return Ok(formatter);
        }

        // Only the compile runs under the map's write lock; logging waits
        // until the lock is released
        let mut constructed = false;
        let result: Result<Arc<DateFormatter>, PatternError> =
            self.formatters.get_or_try_insert_with(pattern, || {
                let formatter = DateFormatter::new(pattern, self.options.clone())?;
                constructed = true;
                Ok(Arc::new(formatter))
            });

        match &result {
            Ok(_) if constructed => {
                self.stats.record_construction();
                debug!(
                    pattern,
                    locale = self.options.locale.identifier,
                    "constructed date formatter"
                );
            }
            Ok(_) => trace!(pattern, "date formatter built by another thread"),
            Err(err) => debug!(pattern, error = %err, "rejected date pattern"),
        }
        result
    }

    /// Options applied to every formatter this cache builds.
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Sorted snapshot of the stored patterns.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = self.formatters.keys();
        keys.sort();
        keys
    }
}
