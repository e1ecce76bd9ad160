//! API Module
//!
//! HTTP handlers and routing for the browser page and its JSON API.
//!
//! # Endpoints
//! - `GET /` - Rendered character grid with search, pager and toasts
//! - HTML form actions: search, reset, page navigation, card selection,
//!   toast dismissal
//! - `/api/*` - JSON equivalents plus `/api/toasts` and `/api/stats`
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
