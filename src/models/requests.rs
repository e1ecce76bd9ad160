//! Request DTOs for the browser API
//!
//! Defines the structure of incoming query strings and JSON bodies.

use serde::Deserialize;

/// Maximum accepted search term length in characters
pub const MAX_SEARCH_LENGTH: usize = 128;

/// Search input, used both as the `GET /search?name=` query and the
/// `POST /api/search` JSON body.
///
/// # Fields
/// - `name`: Character name filter; empty means "all characters"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub name: String,
}

impl SearchRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.chars().count() > MAX_SEARCH_LENGTH {
            return Some(format!(
                "Search term exceeds maximum length of {} characters",
                MAX_SEARCH_LENGTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_deserialize() {
        let req: SearchRequest = serde_json::from_str(r#"{"name": "rick"}"#).unwrap();
        assert_eq!(req.name, "rick");
    }

    #[test]
    fn test_search_request_missing_name() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_too_long() {
        let req = SearchRequest {
            name: "x".repeat(MAX_SEARCH_LENGTH + 1),
        };
        assert!(req.validate().is_some());
    }
}
