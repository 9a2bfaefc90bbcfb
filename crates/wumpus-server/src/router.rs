//! Axum router construction for the game API.
//!
//! Assembles all routes into a single [`Router`] with CORS enabled for the
//! mobile client and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /health` -- liveness check
/// - `POST /api/game/create` -- start a game
/// - `GET /api/game/{id}` -- redacted game state
/// - `DELETE /api/game/{id}` -- delete a game
/// - `GET /api/game/{id}/debug` -- full game state
/// - `POST /api/game/{id}/action` -- apply an action
///
/// CORS allows any origin: the client is a mobile app on the local
/// network, not a browser page with a fixed origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/game/create", post(handlers::create_game))
        .route(
            "/api/game/{id}",
            get(handlers::get_game).delete(handlers::delete_game),
        )
        .route("/api/game/{id}/debug", get(handlers::get_full_game))
        .route("/api/game/{id}/action", post(handlers::perform_action))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
