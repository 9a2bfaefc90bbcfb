//! Error types for the engine binary.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: wumpus_core::ConfigError,
    },

    /// The API server failed to start or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: wumpus_server::ServerError,
    },

    /// The server task was cancelled or panicked.
    #[error("server task failed: {message}")]
    Join {
        /// Description of the join failure.
        message: String,
    },
}

impl From<wumpus_server::StartupError> for EngineError {
    fn from(err: wumpus_server::StartupError) -> Self {
        match err {
            wumpus_server::StartupError::Server(source) => Self::Server { source },
        }
    }
}
