//! Response DTOs for the browser API
//!
//! Defines the structure of outgoing JSON bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::controller::PaginationState;
use crate::models::Character;
use crate::notify::Toast;

/// Current browser state (`GET /api/state` and every mutating JSON route)
#[derive(Debug, Clone, Serialize)]
pub struct StateResponse {
    #[serde(flatten)]
    pub state: PaginationState,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl From<PaginationState> for StateResponse {
    fn from(state: PaginationState) -> Self {
        Self {
            can_go_previous: state.can_go_previous(),
            can_go_next: state.can_go_next(),
            state,
        }
    }
}

/// Response body for `POST /api/characters/:id/select`
#[derive(Debug, Clone, Serialize)]
pub struct SelectResponse {
    pub character: Character,
    pub toast: Toast,
}

/// Response body for `GET /api/toasts`
#[derive(Debug, Clone, Serialize)]
pub struct ToastsResponse {
    pub toasts: Vec<Toast>,
}

/// Response body for the stats endpoint (`GET /api/stats`)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Page lookups served from cache
    pub hits: u64,
    /// Page lookups that went to the network
    pub misses: u64,
    /// Pages stored, including prefetched ones
    pub insertions: u64,
    /// Pages evicted to stay within capacity
    pub evictions: u64,
    /// Pages currently cached
    pub total_entries: usize,
    /// Maximum pages cached at once
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    /// Age of the page next in line for eviction, if any
    pub oldest_entry_age_ms: Option<u64>,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            oldest_entry_age_ms: stats.oldest_entry_age_ms,
        }
    }
}

/// Response body for the health endpoint (`GET /health`)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
