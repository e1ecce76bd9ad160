//! Remote Data Source Module
//!
//! The seam between the page controller and wherever characters come from.

mod http;

#[cfg(test)]
pub(crate) mod fixture;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Character;

pub use http::HttpCharacterSource;

/// One page of characters as delivered by a source.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterPage {
    pub results: Vec<Character>,
    pub total_pages: u32,
}

/// Fetches pages of characters filtered by name.
///
/// Every failure, including "nothing matched", is reported as
/// [`BrowserError::FetchFailed`](crate::error::BrowserError::FetchFailed).
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_page(&self, term: &str, page: u32) -> Result<CharacterPage>;
}
