//! Cache Entry Module
//!
//! Defines one cached page of results.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Character;

// == Cache Entry ==
/// One page of characters plus the total page count known when it was fetched.
///
/// Entries are never modified after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Characters on this page, in remote order
    pub results: Vec<Character>,
    /// Total pages for the search term at fetch time
    pub total_pages: u32,
    /// Fetch timestamp (Unix milliseconds)
    pub cached_at_ms: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(results: Vec<Character>, total_pages: u32) -> Self {
        Self {
            results,
            total_pages,
            cached_at_ms: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds since this page was fetched.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.cached_at_ms)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
