//! Background task helpers for the engine binary.
//!
//! - [`spawn_server`] launches the HTTP server on a Tokio task.
//! - [`spawn_sweeper`] launches the periodic retention sweep.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use wumpus_server::startup::{spawn_server, spawn_sweeper};
//!
//! let state = Arc::new(AppState::default());
//! let server = spawn_server(ServerConfig::default(), Arc::clone(&state))?;
//! let sweeper = spawn_sweeper(state, Duration::from_secs(3600));
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::server::{ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the HTTP server on a background Tokio task.
///
/// The task resolves to the server's own result when it stops, so the
/// caller can await it to block until shutdown.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the configured address does not
/// parse. This is checked before the task is spawned; bind failures are
/// reported through the join handle.
pub fn spawn_server(
    config: ServerConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<Result<(), ServerError>>, StartupError> {
    let addr = config.socket_addr()?;

    let handle = tokio::spawn(async move {
        let result = crate::server::start_server(&config, state).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Server exited with error");
        }
        result
    });

    tracing::info!(%addr, "Server spawned on background task");

    Ok(handle)
}

/// Spawn the retention sweep on a background Tokio task.
///
/// Every `every`, sessions older than the configured TTL are removed.
/// The first sweep runs one full interval after startup.
pub fn spawn_sweeper(state: Arc<AppState>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            let mut games = state.games.write().await;
            let removed = games.sweep_expired(chrono::Utc::now());
            tracing::debug!(
                removed,
                remaining = games.session_count(),
                "Retention sweep finished"
            );
        }
    })
}
