//! Game API server for Wumpus World.
//!
//! This crate provides an Axum HTTP server that exposes the rules engine
//! to the mobile client:
//!
//! - **Game endpoints** under `/api/game` for creating games, reading
//!   their redacted state, applying actions and deleting them
//! - **Debug endpoint** (`/api/game/{id}/debug`) serving the full session,
//!   hazards included, when enabled in configuration
//! - **Health endpoint** (`/health`)
//!
//! # Architecture
//!
//! Handlers hold no game logic. Each one parses the request, takes the
//! [`AppState`] lock, calls into [`wumpus_core::GameService`], and wraps
//! the result in the `{ success, message, data }` envelope.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use startup::{StartupError, spawn_server, spawn_sweeper};
pub use state::AppState;
