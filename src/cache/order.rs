//! Insertion Order Module
//!
//! Tracks the order keys were inserted into the page cache.

use std::collections::VecDeque;

use super::PageKey;

// == Insertion Order ==
/// Tracks insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Earliest inserted
/// - Back = Most recently inserted
///
/// Reads never reorder keys.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: VecDeque<PageKey>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Appends a newly inserted key at the back.
    pub fn record(&mut self, key: PageKey) {
        self.order.push_back(key);
    }

    // == Evict Oldest ==
    /// Returns and removes the earliest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<PageKey> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the earliest inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&PageKey> {
        self.order.front()
    }
}
