//! Shared application state for the game API.
//!
//! [`AppState`] holds the [`GameService`] behind a single async lock.
//! Reads take the read lock; every action takes the write lock for its
//! whole load-resolve-store cycle, which serializes concurrent requests
//! against the same game.

use std::sync::Arc;

use tokio::sync::RwLock;
use wumpus_core::config::WumpusConfig;
use wumpus_core::{GameService, InMemorySessionStore, SessionStore};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The game service (generator, resolver and store).
    pub games: Arc<RwLock<GameService>>,
    /// Whether the unredacted debug view is served.
    pub debug_routes: bool,
}

impl AppState {
    /// Wrap an already-built service.
    pub fn new(service: GameService, debug_routes: bool) -> Self {
        Self {
            games: Arc::new(RwLock::new(service)),
            debug_routes,
        }
    }

    /// Build state from configuration over the given store.
    pub fn from_config(config: &WumpusConfig, store: Box<dyn SessionStore>) -> Self {
        let service = GameService::new(store, &config.game, &config.sessions);
        Self::new(service, config.server.debug_routes)
    }

    /// Build state from configuration over an empty in-memory store.
    pub fn in_memory(config: &WumpusConfig) -> Self {
        Self::from_config(config, Box::new(InMemorySessionStore::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(&WumpusConfig::default())
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState")
            .field("debug_routes", &self.debug_routes)
            .finish_non_exhaustive()
    }
}
