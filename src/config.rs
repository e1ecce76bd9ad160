//! Configuration Module
//!
//! Handles loading and managing browser configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_CAPACITY;

/// Public Rick and Morty API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Browser configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote character API (without the `/character` path)
    pub api_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Number of result pages kept in the page cache
    pub cache_capacity: usize,
    /// How long a toast stays visible, in milliseconds
    pub toast_duration_ms: u64,
    /// Background toast sweep interval in seconds
    pub toast_sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Remote API base URL (default: https://rickandmortyapi.com/api)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_CAPACITY` - Cached result pages (default: 5)
    /// - `TOAST_DURATION_MS` - Toast display time in ms (default: 3000)
    /// - `TOAST_SWEEP_INTERVAL` - Toast sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            toast_duration_ms: parse_var("TOAST_DURATION_MS")
                .unwrap_or(defaults.toast_duration_ms),
            toast_sweep_interval: parse_var("TOAST_SWEEP_INTERVAL")
                .unwrap_or(defaults.toast_sweep_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            server_port: 3000,
            cache_capacity: DEFAULT_CAPACITY,
            toast_duration_ms: 3000,
            toast_sweep_interval: 1,
        }
    }
}
