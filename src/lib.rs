//! Character Browser - A browser-rendered Rick and Morty character browser
//!
//! Serves a searchable, paginated character grid backed by a small page cache
//! that prefetches the next page, plus toast notifications.

pub mod api;
pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod source;
pub mod tasks;
pub mod view;

pub use api::AppState;
pub use config::Config;
pub use controller::PageController;
pub use error::{BrowserError, Result};
pub use tasks::spawn_toast_sweeper;
