//! API Handlers
//!
//! HTML and JSON request handlers for every browser action.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use tracing::debug;

use crate::cache::ResultCache;
use crate::config::Config;
use crate::controller::{PageController, PaginationState};
use crate::error::{BrowserError, Result};
use crate::models::{
    HealthResponse, SearchRequest, SelectResponse, StateResponse, StatsResponse, ToastsResponse,
};
use crate::notify::{selection_message, ToastKind, ToastQueue, RESET_MESSAGE};
use crate::source::{CharacterSource, HttpCharacterSource};
use crate::view::render_page;

/// Application state shared across all handlers.
///
/// The controller is a cheap handle; the toast queue sits behind
/// Arc<RwLock<>> so the sweeper task can share it.
#[derive(Clone)]
pub struct AppState {
    pub controller: PageController,
    pub toasts: Arc<RwLock<ToastQueue>>,
}

impl AppState {
    pub fn new(controller: PageController, toasts: ToastQueue) -> Self {
        Self {
            controller,
            toasts: Arc::new(RwLock::new(toasts)),
        }
    }

    /// Builds state around any character source, sized from the config.
    pub fn with_source(source: Arc<dyn CharacterSource>, config: &Config) -> Self {
        let controller = PageController::new(source, ResultCache::new(config.cache_capacity));
        Self::new(controller, ToastQueue::new(config.toast_duration_ms))
    }

    /// Creates state talking to the remote API named in the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpCharacterSource::new(config.api_base_url.as_str())?;
        Ok(Self::with_source(Arc::new(source), config))
    }

    async fn reset(&self) -> PaginationState {
        let state = self.controller.reset().await.state;
        self.toasts.write().await.push(RESET_MESSAGE, ToastKind::Success);
        state
    }

    async fn select(&self, id: u64) -> Result<SelectResponse> {
        let character = self.controller.select(id).await?;
        let toast = self
            .toasts
            .write()
            .await
            .push(selection_message(&character), ToastKind::Info);
        Ok(SelectResponse { character, toast })
    }
}

fn validate_search(req: &SearchRequest) -> Result<()> {
    match req.validate() {
        Some(error_msg) => Err(BrowserError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

fn validate_page(page: u32) -> Result<()> {
    if page == 0 {
        return Err(BrowserError::InvalidRequest("Pages start at 1".to_string()));
    }
    Ok(())
}

// == HTML Handlers ==

/// Handler for GET /
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.controller.snapshot().await;
    let toasts = state.toasts.read().await.active();
    Html(render_page(&snapshot, &toasts))
}

/// Handler for GET /search?name=
///
/// GET on purpose: the search box is a plain `method="get"` form, so the
/// term stays in the URL. JSON clients use `POST /api/search`.
pub async fn search_page_handler(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Result<Redirect> {
    validate_search(&req)?;
    state.controller.search(&req.name).await;
    Ok(Redirect::to("/"))
}

/// Handler for POST /reset
pub async fn reset_page_handler(State(state): State<AppState>) -> Redirect {
    state.reset().await;
    Redirect::to("/")
}

/// Handler for POST /page/next
pub async fn next_page_handler(State(state): State<AppState>) -> Redirect {
    if let Err(e) = state.controller.next_page().await.into_result() {
        debug!(error = %e, "next page ignored");
    }
    Redirect::to("/")
}

/// Handler for POST /page/previous
pub async fn previous_page_handler(State(state): State<AppState>) -> Redirect {
    if let Err(e) = state.controller.previous_page().await.into_result() {
        debug!(error = %e, "previous page ignored");
    }
    Redirect::to("/")
}

/// Handler for GET /page/:page
pub async fn goto_page_handler(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> Result<Redirect> {
    validate_page(page)?;
    if let Err(e) = state.controller.go_to_page(page).await.into_result() {
        debug!(error = %e, page, "page jump ignored");
    }
    Ok(Redirect::to("/"))
}

/// Handler for POST /characters/:id/select
pub async fn select_page_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect> {
    state.select(id).await?;
    Ok(Redirect::to("/"))
}

/// Handler for POST /toasts/:id/dismiss
pub async fn dismiss_toast_handler(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    state.toasts.write().await.dismiss(id);
    Redirect::to("/")
}

// == JSON Handlers ==

/// Handler for GET /api/state
pub async fn state_handler(State(state): State<AppState>) -> Json<StateResponse> {
    Json(state.controller.snapshot().await.into())
}

/// Handler for POST /api/search
pub async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<StateResponse>> {
    validate_search(&req)?;
    let load = state.controller.search(&req.name).await;
    Ok(Json(load.state.into()))
}

/// Handler for POST /api/reset
pub async fn reset_handler(State(state): State<AppState>) -> Json<StateResponse> {
    Json(state.reset().await.into())
}

/// Handler for POST /api/page/next
pub async fn next_handler(State(state): State<AppState>) -> Result<Json<StateResponse>> {
    let load = state.controller.next_page().await.into_result()?;
    Ok(Json(load.state.into()))
}

/// Handler for POST /api/page/previous
pub async fn previous_handler(State(state): State<AppState>) -> Result<Json<StateResponse>> {
    let load = state.controller.previous_page().await.into_result()?;
    Ok(Json(load.state.into()))
}

/// Handler for GET /api/page/:page
pub async fn goto_handler(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> Result<Json<StateResponse>> {
    validate_page(page)?;
    let load = state.controller.go_to_page(page).await.into_result()?;
    Ok(Json(load.state.into()))
}

/// Handler for POST /api/characters/:id/select
pub async fn select_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SelectResponse>> {
    Ok(Json(state.select(id).await?))
}

/// Handler for GET /api/toasts
pub async fn toasts_handler(State(state): State<AppState>) -> Json<ToastsResponse> {
    let toasts = state.toasts.read().await.active();
    Json(ToastsResponse { toasts })
}

/// Handler for GET /api/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.controller.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
