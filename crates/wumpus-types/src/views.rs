//! Client-facing projections of a [`GameSession`].
//!
//! [`GameView`] is the only shape an untrusted client should receive. It
//! carries everything the player could know: their own state, what they
//! sense, and where they have been. Hazard coordinates appear only in the
//! [`HazardReveal`] block, which is filled in once the game is over.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::GameId;
use crate::structs::{GameSession, Gold, Percepts, Player, Position, Wumpus};

/// Redacted session state safe to show to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GameView {
    /// Session identifier.
    pub game_id: GameId,
    /// Side length of the grid.
    pub grid_size: u8,
    /// The player's own state.
    pub player: Player,
    /// Percepts after the most recent action.
    pub percepts: Percepts,
    /// Running score.
    pub score: i64,
    /// Number of successful actions.
    pub moves: u32,
    /// Fog-of-war grid indexed `[y][x]`.
    pub visited: Vec<Vec<bool>>,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Whether the player escaped with the gold.
    pub won: bool,
    /// Hazard layout, present only after the game is over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub reveal: Option<HazardReveal>,
}

/// The full cave layout, disclosed at the end of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HazardReveal {
    /// The wumpus, dead or alive.
    pub wumpus: Wumpus,
    /// The gold, collected or not.
    pub gold: Gold,
    /// Every pit cell.
    pub pits: BTreeSet<Position>,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        let reveal = session.game_over.then(|| HazardReveal {
            wumpus: session.wumpus,
            gold: session.gold,
            pits: session.pits.clone(),
        });

        Self {
            game_id: session.id,
            grid_size: session.grid_size,
            player: session.player.clone(),
            percepts: session.percepts,
            score: session.score,
            moves: session.moves,
            visited: session.visited.clone(),
            game_over: session.game_over,
            won: session.won,
            reveal,
        }
    }
}
