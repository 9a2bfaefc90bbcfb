//! REST API endpoint handlers.
//!
//! Every response uses the envelope `{ "success", "message", "data" }`
//! that the mobile client expects. Player-facing reads return the
//! redacted [`GameView`]; only the debug route returns the raw session.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness check |
//! | `POST` | `/api/game/create` | Start a game (`{ "gridSize": 4..=10 }`) |
//! | `GET` | `/api/game/{id}` | Redacted game state |
//! | `GET` | `/api/game/{id}/debug` | Full game state, hazards included |
//! | `POST` | `/api/game/{id}/action` | Apply an action (`{ "action": "forward" }`) |
//! | `DELETE` | `/api/game/{id}` | Delete a game |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;
use wumpus_types::{GameId, GameView};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Request body for `POST /api/game/create`.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Grid side length. Defaults to the configured size when absent.
    #[serde(default)]
    pub grid_size: Option<i64>,
}

/// Request body for `POST /api/game/{id}/action`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ActionRequest {
    /// One of `forward`, `left`, `right`, `shoot`, `grab`, `climb`.
    #[serde(default)]
    pub action: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness check.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Wumpus World API is running",
    }))
}

// ---------------------------------------------------------------------------
// POST /api/game/create
// ---------------------------------------------------------------------------

/// Start a new game and return its redacted state with `201 Created`.
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: CreateGameRequest = parse_body(&body)?;
    let grid_size = match request.grid_size {
        Some(n) => Some(u8::try_from(n).ok().ok_or_else(|| {
            ApiError::InvalidBody(format!("grid size must be between 4 and 10, got {n}"))
        })?),
        None => None,
    };

    let session = state.games.write().await.create(grid_size)?;
    let view = GameView::from(&session);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Game created successfully",
            "data": view,
        })),
    ))
}

// ---------------------------------------------------------------------------
// GET /api/game/{id}
// ---------------------------------------------------------------------------

/// Return the redacted state of one game.
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_game_id(&id_str)?;
    let session = state.games.read().await.get(id)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": GameView::from(&session),
    })))
}

// ---------------------------------------------------------------------------
// GET /api/game/{id}/debug
// ---------------------------------------------------------------------------

/// Return the full session including every hazard location.
///
/// Intended for trusted tooling only; disabled by `server.debug_routes`.
pub async fn get_full_game(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.debug_routes {
        return Err(ApiError::DebugDisabled);
    }
    let id = parse_game_id(&id_str)?;
    let session = state.games.read().await.get(id)?;

    tracing::debug!(game_id = %id, "Full game state served");

    Ok(Json(serde_json::json!({
        "success": true,
        "data": serde_json::to_value(&session)?,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/game/{id}/action
// ---------------------------------------------------------------------------

/// Apply one action and return the result with the new redacted state.
pub async fn perform_action(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_game_id(&id_str)?;
    let request: ActionRequest = parse_body(&body)?;

    let outcome = state
        .games
        .write()
        .await
        .act(id, request.action.as_deref())?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": outcome.message(),
        "event": outcome.event,
        "scoreDelta": outcome.score_delta,
        "data": GameView::from(&outcome.session),
    })))
}

// ---------------------------------------------------------------------------
// DELETE /api/game/{id}
// ---------------------------------------------------------------------------

/// Delete a game.
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_game_id(&id_str)?;
    state.games.write().await.delete(id)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Game deleted successfully",
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a game id from a path segment.
fn parse_game_id(s: &str) -> Result<GameId, ApiError> {
    s.parse::<GameId>()
        .map_err(|e| ApiError::InvalidGameId(format!("{s}: {e}")))
}

/// Parse a JSON body, treating an empty body as the default request.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
