//! Configuration loading and typed config structures.
//!
//! The configuration lives in `wumpus-config.yaml` in the working
//! directory. Every field has a default, so an empty or missing file
//! yields a fully usable [`WumpusConfig`].
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 3001
//!   debug_routes: true
//! game:
//!   default_grid_size: 4
//!   seed: 7            # optional; omit for OS randomness
//! sessions:
//!   ttl_seconds: 86400
//!   sweep_interval_seconds: 3600
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {source}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        source: wumpus_world::WorldError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WumpusConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Game creation defaults.
    #[serde(default)]
    pub game: GameSettings,

    /// Session retention.
    #[serde(default)]
    pub sessions: SessionSettings,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WumpusConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    ///
    /// - `PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if `game.default_grid_size` is outside the
    /// supported grid sizes.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        wumpus_world::Grid::checked(self.game.default_grid_size).map_err(|source| {
            ConfigError::Invalid {
                field: "game.default_grid_size",
                source,
            }
        })?;
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether `GET /api/game/{id}/debug` serves the unredacted session.
    #[serde(default = "default_true")]
    pub debug_routes: bool,
}

impl ServerSettings {
    /// Override the port from the `PORT` environment variable when it
    /// holds a valid port number.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PORT") {
            match val.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = %val, error = %e, "Ignoring invalid PORT"),
            }
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug_routes: true,
        }
    }
}

/// Game creation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSettings {
    /// Grid size used when a create request does not name one.
    #[serde(default = "default_grid_size")]
    pub default_grid_size: u8,

    /// Fixed RNG seed for reproducible caves. `None` draws from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_grid_size: default_grid_size(),
            seed: None,
        }
    }
}

/// Session retention settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionSettings {
    /// Sessions older than this many seconds are purged by the sweep.
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Seconds between sweeps.
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3001
}

const fn default_true() -> bool {
    true
}

const fn default_grid_size() -> u8 {
    4
}

const fn default_ttl_seconds() -> u64 {
    24 * 60 * 60
}

const fn default_sweep_interval_seconds() -> u64 {
    60 * 60
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WumpusConfig::default();
        assert_eq!(config.server.port, 3001);
        assert!(config.server.debug_routes);
        assert_eq!(config.game.default_grid_size, 4);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.sessions.ttl_seconds, 86_400);
        assert_eq!(config.sessions.sweep_interval_seconds, 3_600);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8080
  debug_routes: false
game:
  default_grid_size: 6
  seed: 99
sessions:
  ttl_seconds: 600
  sweep_interval_seconds: 60
logging:
  level: "debug"
  json: true
"#;
        let config = WumpusConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.debug_routes);
        assert_eq!(config.game.default_grid_size, 6);
        assert_eq!(config.game.seed, Some(99));
        assert_eq!(config.sessions.ttl_seconds, 600);
        assert_eq!(config.sessions.sweep_interval_seconds, 60);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = WumpusConfig::parse("game:\n  seed: 7\n");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.game.seed, Some(7));
        assert_eq!(config.game.default_grid_size, 4);
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = WumpusConfig::parse("");
        assert_eq!(config.ok(), Some(WumpusConfig::default()));
    }

    #[test]
    fn parse_rejects_unsupported_default_grid_size() {
        for size in [0, 3, 11, 12] {
            let yaml = format!("game:\n  default_grid_size: {size}\n");
            let config = WumpusConfig::parse(&yaml);
            assert!(
                matches!(
                    config,
                    Err(ConfigError::Invalid { field: "game.default_grid_size", .. })
                ),
                "size {size} accepted"
            );
        }
    }

    #[test]
    fn parse_invalid_yaml() {
        let config = WumpusConfig::parse("server: [unterminated");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }
}
