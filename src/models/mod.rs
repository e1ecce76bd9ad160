//! Request and Response models for the character browser
//!
//! Remote API payloads plus the DTOs used for the browser's own JSON API.

pub mod character;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use character::{Character, CharacterListResponse, PageInfo};
pub use requests::SearchRequest;
pub use responses::{
    HealthResponse, SelectResponse, StateResponse, StatsResponse, ToastsResponse,
};
