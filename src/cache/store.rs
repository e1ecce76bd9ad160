//! Result Cache Module
//!
//! Bounded page cache combining HashMap storage with insertion-order eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder, PageKey};

// == Result Cache ==
/// Page cache with a fixed capacity and FIFO eviction.
///
/// A key is written at most once; reads never refresh its position.
#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<PageKey, CacheEntry>,
    order: InsertionOrder,
    stats: CacheStats,
    capacity: usize,
}

impl ResultCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` pages.
    ///
    /// A capacity of zero is raised to one so the page just stored is
    /// always retrievable.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    // == Get ==
    /// Looks up a page, recording a hit or miss.
    pub fn get(&mut self, key: &PageKey) -> Option<CacheEntry> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                debug!(%key, "page cache hit");
                Some(entry.clone())
            }
            None => {
                self.stats.record_miss();
                debug!(%key, "page cache miss");
                None
            }
        }
    }

    // == Contains ==
    /// Presence check that leaves the statistics untouched.
    pub fn contains(&self, key: &PageKey) -> bool {
        self.entries.contains_key(key)
    }

    // == Put ==
    /// Stores a page.
    ///
    /// Returns `false` without modifying anything if the key is already
    /// cached. Otherwise evicts earliest-inserted pages until there is room,
    /// inserts the page as the newest one, and returns `true`.
    pub fn put(&mut self, key: PageKey, entry: CacheEntry) -> bool {
        if self.entries.contains_key(&key) {
            debug!(%key, "page already cached, keeping first copy");
            return false;
        }

        while self.entries.len() >= self.capacity {
            match self.order.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                    debug!(key = %evicted, "evicted oldest cached page");
                }
                None => break,
            }
        }

        self.entries.insert(key.clone(), entry);
        self.order.record(key);

        self.stats.record_insertion();
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats.oldest_entry_age_ms = self
            .oldest_key()
            .and_then(|key| self.entries.get(key))
            .map(CacheEntry::age_ms);
        stats
    }

    /// Key that the next insertion into a full cache would evict.
    pub fn oldest_key(&self) -> Option<&PageKey> {
        self.order.peek_oldest()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(crate::cache::DEFAULT_CAPACITY)
    }
}
