//! Error types for the rules engine and game service.
//!
//! Every failure is reported synchronously and leaves the session exactly
//! as it was. [`GameError::kind`] folds the variants into the four
//! [`ErrorKind`] classes that callers map to transport status codes.

use wumpus_types::GameId;
use wumpus_world::WorldError;

/// Coarse classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request itself was malformed (bad grid size, missing action).
    InvalidInput,
    /// No session with the given id exists.
    NotFound,
    /// The action is known but not allowed in the current state.
    IllegalAction,
    /// The action token is not one of the six recognised actions.
    UnknownAction,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid_input"),
            Self::NotFound => write!(f, "not_found"),
            Self::IllegalAction => write!(f, "illegal_action"),
            Self::UnknownAction => write!(f, "unknown_action"),
        }
    }
}

/// Errors returned by the resolver and the game service.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The cave could not be built (grid size out of range, bad layout).
    #[error("{0}")]
    World(#[from] WorldError),

    /// An action request carried no action token.
    #[error("Action is required")]
    MissingAction,

    /// The action token is not recognised.
    #[error("Invalid action: {0}")]
    UnknownAction(String),

    /// No session with this id.
    #[error("Game not found: {0}")]
    NotFound(GameId),

    /// The session has already ended.
    #[error("Game is already over")]
    GameOver,

    /// A shot was attempted with an empty quiver.
    #[error("No arrows left")]
    NoArrows,

    /// A grab was attempted where there is no uncollected gold.
    #[error("No gold here")]
    NoGoldHere,

    /// A climb was attempted away from the entrance.
    #[error("Can only climb out from starting position (0,0)")]
    NotAtExit,
}

impl GameError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::World(_) | Self::MissingAction => ErrorKind::InvalidInput,
            Self::UnknownAction(_) => ErrorKind::UnknownAction,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::GameOver | Self::NoArrows | Self::NoGoldHere | Self::NotAtExit => {
                ErrorKind::IllegalAction
            }
        }
    }
}
