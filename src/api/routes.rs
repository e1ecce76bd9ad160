//! API Routes
//!
//! Configures the Axum router with the HTML pages and the JSON API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::*;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Rendered browser page
/// - `GET /search`, `POST /reset`, `POST /page/next`, `POST /page/previous`,
///   `GET /page/:page`, `POST /characters/:id/select`, `POST /toasts/:id/dismiss`
///   - HTML form actions, answered with a redirect to `/`. `GET /search` changes
///     state deliberately so the search form can stay a plain GET form
/// - `/api/...` - The same actions as JSON
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/state", get(state_handler))
        .route("/search", post(search_handler))
        .route("/reset", post(reset_handler))
        .route("/page/next", post(next_handler))
        .route("/page/previous", post(previous_handler))
        .route("/page/:page", get(goto_handler))
        .route("/characters/:id/select", post(select_handler))
        .route("/toasts", get(toasts_handler))
        .route("/stats", get(stats_handler));

    Router::new()
        .route("/", get(index_handler))
        .route("/search", get(search_page_handler))
        .route("/reset", post(reset_page_handler))
        .route("/page/next", post(next_page_handler))
        .route("/page/previous", post(previous_page_handler))
        .route("/page/:page", get(goto_page_handler))
        .route("/characters/:id/select", post(select_page_handler))
        .route("/toasts/:id/dismiss", post(dismiss_toast_handler))
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
