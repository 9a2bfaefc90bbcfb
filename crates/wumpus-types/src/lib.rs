//! Shared type definitions for Wumpus World.
//!
//! This crate is the single source of truth for the types that cross crate
//! and process boundaries. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the mobile client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for session identifiers
//! - [`enums`] -- [`Direction`] with rotation, and the [`Action`] set
//! - [`structs`] -- Session state: player, wumpus, gold, pits, percepts
//! - [`views`] -- Redacted projection served to untrusted clients

#![cfg_attr(
    test,
    allow(
        clippy::similar_names,
        reason = "test bindings are named after the fields they check"
    )
)]

pub mod enums;
pub mod ids;
pub mod structs;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use enums::{Action, Direction};
pub use ids::GameId;
pub use structs::{GameSession, Gold, Percepts, Player, Position, Wumpus};
pub use views::{GameView, HazardReveal};
