//! Cache Module
//!
//! Bounded page cache keyed by `(search term, page)` with insertion-order eviction.

mod entry;
mod key;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::PageKey;
pub(crate) use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::ResultCache;

// == Public Constants ==
/// Default number of result pages kept in memory
pub const DEFAULT_CAPACITY: usize = 5;
