//! Scripted in-memory source for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{CharacterPage, CharacterSource};
use crate::cache::PageKey;
use crate::error::{BrowserError, Result};
use crate::models::Character;

/// Serves scripted pages and records every request.
#[derive(Default)]
pub struct StubSource {
    pub pages: HashMap<PageKey, CharacterPage>,
    pub delays: HashMap<PageKey, Duration>,
    calls: Mutex<Vec<PageKey>>,
}

impl StubSource {
    /// `total_pages` pages for `term`; page `p` holds ids `10p` and `10p + 1`.
    pub fn with_pages(term: &str, total_pages: u32) -> Self {
        let mut stub = Self::default();
        for page in 1..=total_pages {
            stub.pages.insert(
                PageKey::new(term, page),
                CharacterPage {
                    results: vec![
                        character(page as u64 * 10),
                        character(page as u64 * 10 + 1),
                    ],
                    total_pages,
                },
            );
        }
        stub
    }

    pub fn calls(&self) -> Vec<PageKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, term: &str, page: u32) -> usize {
        let key = PageKey::new(term, page);
        self.calls().iter().filter(|k| **k == key).count()
    }
}

#[async_trait]
impl CharacterSource for StubSource {
    async fn fetch_page(&self, term: &str, page: u32) -> Result<CharacterPage> {
        let key = PageKey::new(term, page);
        self.calls.lock().unwrap().push(key.clone());
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| BrowserError::FetchFailed(format!("no page {}", key)))
    }
}

pub fn character(id: u64) -> Character {
    Character {
        id,
        name: format!("Character {}", id),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        image: format!("https://example.test/{}.jpeg", id),
    }
}
