//! Error types for the game API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body uses the same envelope as a success, with `success: false`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wumpus_core::{ErrorKind, GameError};

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A rules-engine or service failure.
    #[error(transparent)]
    Game(#[from] GameError),

    /// The game id in the path is not a UUID.
    #[error("Invalid game id: {0}")]
    InvalidGameId(String),

    /// The request body could not be understood.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The debug view is switched off in configuration.
    #[error("Debug routes are disabled")]
    DebugDisabled,

    /// A serialization error while building the response.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Game(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::InvalidInput | ErrorKind::IllegalAction | ErrorKind::UnknownAction => {
                    StatusCode::BAD_REQUEST
                }
            },
            Self::InvalidGameId(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::DebugDisabled => StatusCode::FORBIDDEN,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error class for the response body.
    fn code(&self) -> String {
        match self {
            Self::Game(e) => e.kind().to_string(),
            Self::InvalidGameId(_) | Self::InvalidBody(_) => ErrorKind::InvalidInput.to_string(),
            Self::DebugDisabled => "forbidden".to_owned(),
            Self::Serialization(_) => "internal".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
            "error": self.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
