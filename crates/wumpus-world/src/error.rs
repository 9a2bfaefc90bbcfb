//! Error types for the `wumpus-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type alias.

use wumpus_types::Position;

/// Errors that can occur while building or validating a cave layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The requested grid size is outside the supported range.
    #[error("grid size must be between {min} and {max}, got {size}")]
    InvalidGridSize {
        /// The rejected size.
        size: u8,
        /// Smallest accepted size.
        min: u8,
        /// Largest accepted size.
        max: u8,
    },

    /// A layout entity lies outside the grid.
    #[error("{entity} at {position} is outside a {grid_size}x{grid_size} grid")]
    OutOfBounds {
        /// Which entity was misplaced.
        entity: &'static str,
        /// Where it was placed.
        position: Position,
        /// Side length of the grid.
        grid_size: u8,
    },

    /// Two layout entities share a cell that must be exclusive.
    #[error("{entity} at {position} overlaps {other}")]
    Overlap {
        /// The entity being placed.
        entity: &'static str,
        /// The contested cell.
        position: Position,
        /// What already occupies the cell.
        other: &'static str,
    },
}
