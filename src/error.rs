//! Error types for the character browser
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Browser Error Enum ==
/// Unified error type for the character browser.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Remote request failed, returned a non-success status, or matched nothing
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Character is not on the current page
    #[error("Character not found: {0}")]
    CharacterNotFound(u64),

    /// Pager is disabled (not-found active, or already at a boundary)
    #[error("Navigation disabled: {0}")]
    NavigationDisabled(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BrowserError {
    fn into_response(self) -> Response {
        let status = match &self {
            BrowserError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
            BrowserError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            BrowserError::CharacterNotFound(_) => StatusCode::NOT_FOUND,
            BrowserError::NavigationDisabled(_) => StatusCode::CONFLICT,
            BrowserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the character browser.
pub type Result<T> = std::result::Result<T, BrowserError>;
