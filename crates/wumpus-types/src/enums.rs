//! Enumeration types for Wumpus World.
//!
//! [`Direction`] replaces integer headings with an explicit compass type
//! and defines rotation on it. [`Action`] is the closed set of moves a
//! player can submit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// The compass direction the player is facing.
///
/// North is increasing `y`, east is increasing `x`. The player starts every
/// game facing [`Direction::North`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum Direction {
    /// Facing increasing `y`.
    #[default]
    North,
    /// Facing increasing `x`.
    East,
    /// Facing decreasing `y`.
    South,
    /// Facing decreasing `x`.
    West,
}

impl Direction {
    /// All four directions in clockwise order starting from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction after a 90 degree clockwise turn.
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The direction after a 90 degree counter-clockwise turn.
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Unit step `(dx, dy)` for one cell of movement in this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::North => write!(f, "NORTH"),
            Self::East => write!(f, "EAST"),
            Self::South => write!(f, "SOUTH"),
            Self::West => write!(f, "WEST"),
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single player action.
///
/// On the wire actions are lowercase tokens (`forward`, `left`, `right`,
/// `shoot`, `grab`, `climb`). [`Action::parse`] accepts them in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Action {
    /// Step one cell in the facing direction.
    Forward,
    /// Rotate 90 degrees counter-clockwise.
    Left,
    /// Rotate 90 degrees clockwise.
    Right,
    /// Loose the arrow in the facing direction.
    Shoot,
    /// Pick up the gold in the current cell.
    Grab,
    /// Leave the cave through the entrance at `(0, 0)`.
    Climb,
}

impl Action {
    /// Every action, in wire-token order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Left,
        Self::Right,
        Self::Shoot,
        Self::Grab,
        Self::Climb,
    ];

    /// The lowercase wire token for this action.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Left => "left",
            Self::Right => "right",
            Self::Shoot => "shoot",
            Self::Grab => "grab",
            Self::Climb => "climb",
        }
    }

    /// Parse a wire token, ignoring ASCII case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the six tokens.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.token().eq_ignore_ascii_case(token))
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.token())
    }
}
