//! HTTP character source backed by the public Rick and Morty API.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{CharacterPage, CharacterSource};
use crate::error::{BrowserError, Result};
use crate::models::CharacterListResponse;

/// Talks to `GET {base}/character/?page={p}&name={n}`.
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: Client,
    base_url: String,
}

impl HttpCharacterSource {
    /// Builds a source against `base_url`, e.g. `https://rickandmortyapi.com/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| BrowserError::Internal(format!("HTTP client error: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/character/", self.base_url)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn fetch_page(&self, term: &str, page: u32) -> Result<CharacterPage> {
        let url = self.endpoint();
        debug!(%url, term, page, "fetching character page");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page.to_string()), ("name", term.to_string())])
            .send()
            .await
            .map_err(|e| BrowserError::FetchFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::FetchFailed(format!(
                "Remote API returned {}",
                status
            )));
        }

        let body: CharacterListResponse = response
            .json()
            .await
            .map_err(|e| BrowserError::FetchFailed(format!("Failed to decode body: {}", e)))?;

        if body.results.is_empty() {
            return Err(BrowserError::FetchFailed(format!(
                "No characters matched {:?} on page {}",
                term, page
            )));
        }

        Ok(CharacterPage {
            results: body.results,
            total_pages: body.info.pages,
        })
    }
}
