//! Server binary for Wumpus World.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `wumpus-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the game service over an in-memory session store
//! 4. Start the retention sweep
//! 5. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use wumpus_core::WumpusConfig;
use wumpus_core::config::LoggingConfig;
use wumpus_server::{AppState, ServerConfig};

use crate::error::EngineError;

const CONFIG_PATH: &str = "wumpus-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the server
/// fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // Logging is not up yet, so config loading reports through the result.
    let (config, from_file) = load_config()?;
    init_logging(&config.logging);

    info!(
        from_file,
        host = %config.server.host,
        port = config.server.port,
        debug_routes = config.server.debug_routes,
        default_grid_size = config.game.default_grid_size,
        seeded = config.game.seed.is_some(),
        ttl_seconds = config.sessions.ttl_seconds,
        "wumpus-engine starting"
    );

    let state = Arc::new(AppState::in_memory(&config));

    let every = Duration::from_secs(config.sessions.sweep_interval_seconds.max(1));
    let _sweeper = wumpus_server::spawn_sweeper(Arc::clone(&state), every);
    info!(interval_seconds = every.as_secs(), "Retention sweep started");

    let server = wumpus_server::spawn_server(ServerConfig::from(&config.server), state)?;
    server
        .await
        .map_err(|e| EngineError::Join {
            message: e.to_string(),
        })??;

    info!("wumpus-engine stopped");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load configuration from `wumpus-config.yaml`.
///
/// Returns the config and whether it came from the file. When the file
/// is absent the defaults are used, still subject to `PORT`.
fn load_config() -> Result<(WumpusConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((WumpusConfig::from_file(config_path)?, true))
    } else {
        let mut config = WumpusConfig::default();
        config.server.apply_env_overrides();
        Ok((config, false))
    }
}
