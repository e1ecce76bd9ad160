//! Cache Statistics Module
//!
//! Counts page cache hits, misses, insertions and evictions.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that had to go to the network
    pub misses: u64,
    /// Pages stored, including prefetched ones
    pub insertions: u64,
    /// Pages dropped to stay within capacity
    pub evictions: u64,
    /// Pages currently held
    pub total_entries: usize,
    /// Maximum pages held at once
    pub capacity: usize,
    /// Age of the next page to be evicted, in milliseconds
    pub oldest_entry_age_ms: Option<u64>,
}

impl CacheStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
