//! Grid geometry and cave generation for Wumpus World.
//!
//! This crate models the physical cave: a square grid that never wraps,
//! and the random placement of the entrance, the wumpus, the gold and the
//! pits.
//!
//! # Modules
//!
//! - [`error`] -- Error types for layout validation.
//! - [`grid`] -- Bounds, stepping, orthogonal neighbours and straight rays.
//! - [`generator`] -- Rejection-sampled cave generation and fixed layouts.

pub mod error;
pub mod generator;
pub mod grid;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use generator::{WorldLayout, generate, pit_count};
pub use grid::{Grid, MAX_GRID_SIZE, MIN_GRID_SIZE};
