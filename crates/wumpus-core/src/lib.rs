//! Rules engine and session lifecycle for Wumpus World.
//!
//! The engine is a deterministic state-transition function: given a
//! session and an action it produces a new session and a result, with no
//! I/O and no shared state. Everything around it (storage, configuration,
//! randomness) is injected.
//!
//! # Modules
//!
//! - [`config`] -- Typed YAML configuration with defaults.
//! - [`error`] -- [`GameError`] and its [`ErrorKind`] classification.
//! - [`perception`] -- Stench, breeze and glitter for the player's cell.
//! - [`resolver`] -- The action state machine and scoring.
//! - [`service`] -- Create, act, delete and sweep over a session store.
//! - [`session`] -- Building a fresh session from a cave layout.
//! - [`store`] -- The [`SessionStore`] trait and its in-memory impl.

pub mod config;
pub mod error;
pub mod perception;
pub mod resolver;
pub mod service;
pub mod session;
pub mod store;

pub use config::{ConfigError, WumpusConfig};
pub use error::{ErrorKind, GameError};
pub use perception::perceive;
pub use resolver::{ActionEvent, ActionOutcome, resolve};
pub use service::GameService;
pub use session::new_session;
pub use store::{InMemorySessionStore, SessionStore};
