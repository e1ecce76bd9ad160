//! Page Controller
//!
//! Serves pages from the cache or the remote source and warms the cache
//! with the following page.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::PaginationState;
use crate::cache::{CacheEntry, CacheStats, PageKey, ResultCache};
use crate::error::{BrowserError, Result};
use crate::models::Character;
use crate::source::CharacterSource;

/// Outcome of [`PageController::load_page`].
#[derive(Debug)]
pub struct PageLoad {
    /// State right after the main request resolved
    pub state: PaginationState,
    /// Background fetch of the next page, if one was started.
    ///
    /// Request handlers drop this; nothing on the request path waits for it.
    pub prefetch: Option<JoinHandle<()>>,
}

/// Why a navigation request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    NotFound,
    NoPages,
    AtBoundary,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            BlockReason::NotFound => "no results are shown",
            BlockReason::NoPages => "no pages are loaded",
            BlockReason::AtBoundary => "already at that page",
        };
        f.write_str(reason)
    }
}

#[derive(Debug)]
pub enum Navigation {
    Moved(PageLoad),
    Blocked(BlockReason),
}

impl Navigation {
    /// Turns a blocked move into [`BrowserError::NavigationDisabled`].
    pub fn into_result(self) -> Result<PageLoad> {
        match self {
            Navigation::Moved(load) => Ok(load),
            Navigation::Blocked(reason) => Err(BrowserError::NavigationDisabled(reason.to_string())),
        }
    }
}

// == Page Controller ==
/// Owns one result cache and one pagination state.
///
/// Cloning shares both; clones are handles onto the same controller.
#[derive(Clone)]
pub struct PageController {
    source: Arc<dyn CharacterSource>,
    cache: Arc<RwLock<ResultCache>>,
    state: Arc<RwLock<PaginationState>>,
    /// Bumped by every load; responses from older loads leave state alone
    generation: Arc<AtomicU64>,
}

impl PageController {
    pub fn new(source: Arc<dyn CharacterSource>, cache: ResultCache) -> Self {
        Self {
            source,
            cache: Arc::new(RwLock::new(cache)),
            state: Arc::new(RwLock::new(PaginationState::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    // == Load Page ==
    /// Shows page `page` of `term`, from cache if possible, then starts a
    /// prefetch of `page + 1` when it exists and is not cached yet.
    ///
    /// Never fails: a failed fetch shows the not-found state.
    pub async fn load_page(&self, term: &str, page: u32) -> PageLoad {
        let page = page.max(1);
        let key = PageKey::new(term, page);

        let generation = {
            let mut state = self.state.write().await;
            // Bumped under the lock so generation order matches state writes
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.search_term = term.to_string();
            state.current_page = page;
            state.is_loading = true;
            generation
        };

        let cached = self.cache.write().await.get(&key);
        let known_total = match cached {
            Some(entry) => {
                let total = entry.total_pages;
                self.apply(generation, |s| s.show(entry.results, total)).await;
                Some(total)
            }
            None => match self.source.fetch_page(term, page).await {
                Ok(fetched) => {
                    let total = fetched.total_pages;
                    self.cache
                        .write()
                        .await
                        .put(key.clone(), CacheEntry::new(fetched.results.clone(), total));
                    self.apply(generation, |s| s.show(fetched.results, total)).await;
                    Some(total)
                }
                Err(e) => {
                    warn!(%key, error = %e, "page fetch failed");
                    self.apply(generation, PaginationState::show_not_found).await;
                    None
                }
            },
        };

        let prefetch = match known_total {
            Some(total) => self.spawn_prefetch(&key, total).await,
            None => None,
        };

        PageLoad {
            state: self.snapshot().await,
            prefetch,
        }
    }

    /// Applies a resolved response unless a newer load has started since.
    async fn apply<F>(&self, generation: u64, update: F) -> bool
    where
        F: FnOnce(&mut PaginationState),
    {
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale page response");
            return false;
        }
        update(&mut state);
        state.is_loading = false;
        true
    }

    async fn spawn_prefetch(&self, key: &PageKey, total_pages: u32) -> Option<JoinHandle<()>> {
        let next = key.next();
        if next.page <= key.page || next.page > total_pages {
            return None;
        }
        if self.cache.read().await.contains(&next) {
            return None;
        }

        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        Some(tokio::spawn(async move {
            match source.fetch_page(&next.term, next.page).await {
                Ok(fetched) => {
                    let stored = cache
                        .write()
                        .await
                        .put(next.clone(), CacheEntry::new(fetched.results, fetched.total_pages));
                    debug!(key = %next, stored, "prefetched page");
                }
                Err(e) => debug!(key = %next, error = %e, "prefetch failed"),
            }
        }))
    }

    // == User Actions ==
    /// Loads page 1 for a new search term.
    pub async fn search(&self, term: &str) -> PageLoad {
        let term = term.trim();
        info!(term, "search");
        self.load_page(term, 1).await
    }

    /// Clears the search term and returns to page 1.
    pub async fn reset(&self) -> PageLoad {
        info!("search reset");
        self.load_page("", 1).await
    }

    pub async fn next_page(&self) -> Navigation {
        let (term, target) = {
            let state = self.state.read().await;
            if state.is_not_found {
                return Navigation::Blocked(BlockReason::NotFound);
            }
            if !state.can_go_next() {
                return Navigation::Blocked(BlockReason::AtBoundary);
            }
            (state.search_term.clone(), state.current_page + 1)
        };
        Navigation::Moved(self.load_page(&term, target).await)
    }

    pub async fn previous_page(&self) -> Navigation {
        let (term, target) = {
            let state = self.state.read().await;
            if state.is_not_found {
                return Navigation::Blocked(BlockReason::NotFound);
            }
            if !state.can_go_previous() {
                return Navigation::Blocked(BlockReason::AtBoundary);
            }
            (state.search_term.clone(), state.current_page - 1)
        };
        Navigation::Moved(self.load_page(&term, target).await)
    }

    /// Jumps to `page`, clamped to `[1, total_pages]`.
    pub async fn go_to_page(&self, page: u32) -> Navigation {
        let (term, target) = {
            let state = self.state.read().await;
            if state.is_not_found {
                return Navigation::Blocked(BlockReason::NotFound);
            }
            if state.total_pages == 0 {
                return Navigation::Blocked(BlockReason::NoPages);
            }
            let target = state.clamp_page(page);
            if target == state.current_page {
                return Navigation::Blocked(BlockReason::AtBoundary);
            }
            (state.search_term.clone(), target)
        };
        Navigation::Moved(self.load_page(&term, target).await)
    }

    /// Looks up a character shown on the current page.
    pub async fn select(&self, id: u64) -> Result<Character> {
        let state = self.state.read().await;
        let character = state
            .find_character(id)
            .cloned()
            .ok_or(BrowserError::CharacterNotFound(id))?;
        info!(id, name = %character.name, "character selected");
        Ok(character)
    }

    // == Accessors ==
    pub async fn snapshot(&self) -> PaginationState {
        self.state.read().await.clone()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub async fn is_cached(&self, term: &str, page: u32) -> bool {
        self.cache.read().await.contains(&PageKey::new(term, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixture::StubSource;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    fn controller(stub: StubSource) -> (PageController, Arc<StubSource>) {
        let stub = Arc::new(stub);
        let controller = PageController::new(stub.clone(), ResultCache::new(5));
        (controller, stub)
    }

    async fn settle(load: PageLoad) -> PaginationState {
        if let Some(handle) = load.prefetch {
            handle.await.unwrap();
        }
        load.state
    }

    #[tokio::test]
    async fn test_first_page_caches_and_prefetches() {
        let (controller, stub) = controller(StubSource::with_pages("", 5));

        let load = controller.load_page("", 1).await;
        assert!(load.prefetch.is_some());
        let state = settle(load).await;

        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 5);
        assert_eq!(state.characters[0].id, 10);
        assert!(!state.is_not_found);
        assert!(!state.is_loading);
        assert!(controller.is_cached("", 1).await);
        assert!(controller.is_cached("", 2).await);
        assert_eq!(stub.calls(), vec![PageKey::new("", 1), PageKey::new("", 2)]);
    }

    #[tokio::test]
    async fn test_prefetched_page_is_cache_hit() {
        let (controller, stub) = controller(StubSource::with_pages("", 5));
        settle(controller.load_page("", 1).await).await;

        let state = match controller.next_page().await {
            Navigation::Moved(load) => settle(load).await,
            Navigation::Blocked(reason) => panic!("blocked: {}", reason),
        };

        assert_eq!(state.current_page, 2);
        assert_eq!(state.characters[0].id, 20);
        assert_eq!(stub.calls_for("", 2), 1);
        // Page 3 prefetched after moving to page 2
        assert_eq!(stub.calls_for("", 3), 1);
        assert!(controller.cache_stats().await.hits >= 1);
    }

    #[tokio::test]
    async fn test_cached_key_never_refetched() {
        let (controller, stub) = controller(StubSource::with_pages("", 3));

        settle(controller.load_page("", 1).await).await;
        settle(controller.load_page("", 1).await).await;
        settle(controller.load_page("", 1).await).await;

        assert_eq!(stub.calls_for("", 1), 1);
        assert_eq!(stub.calls_for("", 2), 1);
    }

    #[tokio::test]
    async fn test_last_page_does_not_prefetch() {
        let (controller, stub) = controller(StubSource::with_pages("", 3));

        let load = controller.load_page("", 3).await;
        assert!(load.prefetch.is_none());
        assert_eq!(load.state.total_pages, 3);
        assert_eq!(stub.calls(), vec![PageKey::new("", 3)]);
    }

    #[tokio::test]
    async fn test_single_page_result_does_not_prefetch() {
        let (controller, stub) = controller(StubSource::with_pages("birdperson", 1));

        let load = controller.search("birdperson").await;
        assert!(load.prefetch.is_none());
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_not_found() {
        let (controller, stub) = controller(StubSource::with_pages("", 5));
        settle(controller.load_page("", 1).await).await;

        let load = controller.search("zzz-no-match").await;
        assert!(load.prefetch.is_none());

        let state = load.state;
        assert!(state.is_not_found);
        assert!(state.characters.is_empty());
        assert!(!state.is_loading);
        assert!(!state.can_go_next());
        assert!(!state.can_go_previous());
        assert_eq!(state.search_term, "zzz-no-match");
        assert_eq!(stub.calls_for("zzz-no-match", 2), 0);
        // Other cached keys are untouched
        assert!(controller.is_cached("", 1).await);
    }

    #[tokio::test]
    async fn test_prefetch_failure_is_silent() {
        let mut stub = StubSource::with_pages("", 3);
        stub.pages.remove(&PageKey::new("", 2));
        let (controller, stub) = controller(stub);

        let state = settle(controller.load_page("", 1).await).await;
        let after = controller.snapshot().await;

        assert!(!state.is_not_found);
        assert_eq!(after, state);
        assert_eq!(stub.calls_for("", 2), 1);
        assert!(!controller.is_cached("", 2).await);
    }

    #[tokio::test]
    async fn test_navigation_blocked_when_not_found() {
        let (controller, _stub) = controller(StubSource::default());
        controller.load_page("", 1).await;

        assert!(matches!(controller.next_page().await, Navigation::Blocked(BlockReason::NotFound)));
        assert!(matches!(controller.previous_page().await, Navigation::Blocked(BlockReason::NotFound)));
        assert!(matches!(controller.go_to_page(2).await, Navigation::Blocked(BlockReason::NotFound)));
    }

    #[tokio::test]
    async fn test_navigation_blocked_at_boundaries() {
        let (controller, _stub) = controller(StubSource::with_pages("", 2));
        settle(controller.load_page("", 1).await).await;
        assert!(matches!(controller.previous_page().await, Navigation::Blocked(BlockReason::AtBoundary)));

        settle(controller.load_page("", 2).await).await;
        assert_err!(controller.next_page().await.into_result());
    }

    #[tokio::test]
    async fn test_go_to_page_clamps() {
        let (controller, _stub) = controller(StubSource::with_pages("", 4));
        settle(controller.load_page("", 1).await).await;

        let load = assert_ok!(controller.go_to_page(40).await.into_result());
        assert_eq!(settle(load).await.current_page, 4);

        let load = assert_ok!(controller.go_to_page(0).await.into_result());
        assert_eq!(settle(load).await.current_page, 1);
    }

    #[tokio::test]
    async fn test_go_to_page_before_any_load() {
        let (controller, _stub) = controller(StubSource::with_pages("", 4));
        assert!(matches!(controller.go_to_page(2).await, Navigation::Blocked(BlockReason::NoPages)));
    }

    #[tokio::test]
    async fn test_reset_clears_term() {
        let (controller, _stub) = controller(StubSource::with_pages("", 3));
        controller.search("zzz").await;

        let state = settle(controller.reset().await).await;
        assert_eq!(state.search_term, "");
        assert_eq!(state.current_page, 1);
        assert!(!state.is_not_found);
    }

    #[tokio::test]
    async fn test_search_trims_term() {
        let (controller, stub) = controller(StubSource::with_pages("rick", 1));
        let state = controller.search("  rick ").await.state;
        assert_eq!(state.search_term, "rick");
        assert_eq!(stub.calls(), vec![PageKey::new("rick", 1)]);
    }

    #[tokio::test]
    async fn test_select_character() {
        let (controller, _stub) = controller(StubSource::with_pages("", 1));
        controller.load_page("", 1).await;

        let character = assert_ok!(controller.select(11).await);
        assert_eq!(character.name, "Character 11");
        assert!(matches!(controller.select(99).await, Err(BrowserError::CharacterNotFound(99))));
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_newer_page() {
        let mut stub = StubSource::with_pages("", 5);
        stub.delays.insert(PageKey::new("", 1), Duration::from_millis(200));
        let (controller, _stub) = controller(stub);

        let slow = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.load_page("", 1).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let fast = settle(controller.load_page("", 3).await).await;
        assert_eq!(fast.current_page, 3);

        settle(slow.await.unwrap()).await;
        let state = controller.snapshot().await;
        assert_eq!(state.current_page, 3);
        assert_eq!(state.characters[0].id, 30);
        // The slow page still lands in the cache
        assert!(controller.is_cached("", 1).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_loads_keep_page_and_results_together() {
        let (controller, _stub) = controller(StubSource::with_pages("", 5));

        let loads: Vec<_> = (0..40u32)
            .map(|i| {
                let controller = controller.clone();
                tokio::spawn(async move { controller.load_page("", i % 5 + 1).await })
            })
            .collect();
        for load in loads {
            settle(load.await.unwrap()).await;
        }

        let state = controller.snapshot().await;
        assert!(!state.is_loading);
        assert_eq!(state.characters[0].id, state.current_page as u64 * 10);
    }
}
