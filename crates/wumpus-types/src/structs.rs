//! Core entity structs for a Wumpus World session.
//!
//! A [`GameSession`] owns everything about one game: the player, the
//! hazards, the gold, the fog-of-war visited grid, the current percepts
//! and the score. Field names serialize in camelCase to match the mobile
//! client's expectations.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Direction;
use crate::ids::GameId;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on the grid. `(0, 0)` is the entrance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Column, increasing eastward.
    pub x: u8,
    /// Row, increasing northward.
    pub y: u8,
}

impl Position {
    /// The entrance cell where every game starts and the only exit.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Construct a position.
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Current column.
    pub x: u8,
    /// Current row.
    pub y: u8,
    /// Facing direction.
    pub direction: Direction,
    /// False once the player has fallen into a pit or been eaten.
    pub alive: bool,
    /// True once the gold has been picked up.
    pub has_gold: bool,
    /// Arrows remaining. Starts at 1.
    pub arrows: u8,
}

impl Player {
    /// A fresh player at the entrance, facing north with one arrow.
    pub const fn at_entrance() -> Self {
        Self {
            x: 0,
            y: 0,
            direction: Direction::North,
            alive: true,
            has_gold: false,
            arrows: 1,
        }
    }

    /// The player's current cell.
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Move the player to `pos` without any rule checks.
    pub const fn set_position(&mut self, pos: Position) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

/// The wumpus. It never moves; an arrow can kill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Wumpus {
    /// Column of the wumpus's lair.
    pub x: u8,
    /// Row of the wumpus's lair.
    pub y: u8,
    /// False after a successful shot.
    pub alive: bool,
}

impl Wumpus {
    /// The wumpus's cell.
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// The single piece of gold hidden in the cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Gold {
    /// Column of the gold.
    pub x: u8,
    /// Row of the gold.
    pub y: u8,
    /// True once grabbed.
    pub collected: bool,
}

impl Gold {
    /// The gold's cell.
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Percepts
// ---------------------------------------------------------------------------

/// Sensory signals available to the player after an action.
///
/// `stench`, `breeze` and `glitter` follow from the player's cell. `bump`
/// and `scream` are reported only for the action that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[allow(
    clippy::struct_excessive_bools,
    reason = "each percept is an independent sensor flag on the wire"
)]
pub struct Percepts {
    /// A live wumpus is in an orthogonally adjacent cell.
    pub stench: bool,
    /// A pit is in an orthogonally adjacent cell.
    pub breeze: bool,
    /// Uncollected gold is in the player's cell.
    pub glitter: bool,
    /// The last move walked into a wall.
    pub bump: bool,
    /// The last shot killed the wumpus.
    pub scream: bool,
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

/// Complete state of one game, hazards included.
///
/// Serializing this type directly exposes every hazard location. Untrusted
/// callers should only ever see a [`GameView`](crate::views::GameView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GameSession {
    /// Session identifier.
    #[serde(rename = "gameId")]
    pub id: GameId,
    /// Side length of the square grid (4 to 10).
    pub grid_size: u8,
    /// The player.
    pub player: Player,
    /// The wumpus.
    pub wumpus: Wumpus,
    /// The gold.
    pub gold: Gold,
    /// Pit cells. Fixed for the life of the session.
    pub pits: BTreeSet<Position>,
    /// Fog-of-war grid indexed `[y][x]`.
    pub visited: Vec<Vec<bool>>,
    /// Percepts after the most recent action.
    pub percepts: Percepts,
    /// Running score.
    pub score: i64,
    /// Number of successful actions.
    pub moves: u32,
    /// True once the game has ended by death or climbing out.
    pub game_over: bool,
    /// True only when the player climbed out carrying the gold.
    pub won: bool,
    /// When the session was created.
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    /// Build an unvisited `size` x `size` grid with only the entrance marked.
    pub fn fresh_visited(size: u8) -> Vec<Vec<bool>> {
        let side = usize::from(size);
        let mut grid = vec![vec![false; side]; side];
        if let Some(cell) = grid.first_mut().and_then(|row| row.first_mut()) {
            *cell = true;
        }
        grid
    }

    /// Mark `pos` as visited. Out-of-range positions are ignored.
    pub fn mark_visited(&mut self, pos: Position) {
        if let Some(cell) = self
            .visited
            .get_mut(usize::from(pos.y))
            .and_then(|row| row.get_mut(usize::from(pos.x)))
        {
            *cell = true;
        }
    }

    /// Whether `pos` holds a pit.
    pub fn is_pit(&self, pos: Position) -> bool {
        self.pits.contains(&pos)
    }
}
