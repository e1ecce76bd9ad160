//! Character payloads from the remote API
//!
//! Wire shapes for `GET /character`. Only the fields the browser renders are
//! kept; everything else in the remote payload is ignored.

use serde::{Deserialize, Serialize};

/// A single character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    /// "Alive", "Dead" or "unknown"
    pub status: String,
    #[serde(default)]
    pub species: String,
    /// Avatar image URL
    pub image: String,
}

/// Pagination metadata returned alongside each page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u64,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Response body of `GET /character/?page=&name=`.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterListResponse {
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<Character>,
}
