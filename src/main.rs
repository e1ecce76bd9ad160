//! Character Browser - A browser-rendered Rick and Morty character browser
//!
//! Serves a searchable, paginated character grid backed by a small page cache.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use character_browser::{api::create_router, spawn_toast_sweeper, AppState, Config};

/// Main entry point for the character browser.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the page controller and toast queue
/// 4. Load the first page of all characters
/// 5. Start the background toast sweeper
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "character_browser=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Character Browser");

    let config = Config::from_env();
    info!(
        "Configuration loaded: api={}, cache_capacity={}, toast_duration={}ms, port={}",
        config.api_base_url, config.cache_capacity, config.toast_duration_ms, config.server_port
    );

    let state = AppState::from_config(&config).context("failed to build application state")?;

    let initial = state.controller.load_page("", 1).await;
    if initial.state.is_not_found {
        warn!("Initial page could not be loaded; serving the not-found view");
    } else {
        info!(
            "Initial page loaded: {} characters, {} pages",
            initial.state.characters.len(),
            initial.state.total_pages
        );
    }

    let sweeper_handle = spawn_toast_sweeper(state.toasts.clone(), config.toast_sweep_interval);
    info!("Toast sweeper started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the toast sweeper and allows graceful shutdown.
async fn shutdown_signal(sweeper_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    sweeper_handle.abort();
    warn!("Toast sweeper aborted");
}
