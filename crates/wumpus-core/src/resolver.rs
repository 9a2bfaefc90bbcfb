//! Action resolution: the Wumpus World state machine.
//!
//! A session is either *active* or *over*. Every action requires an active
//! session. The only ways to end a game are dying (walking into a pit or a
//! live wumpus) and climbing out at the entrance; climbing with the gold is
//! the only way to win. Nothing leaves the *over* state.
//!
//! # Scoring
//!
//! | Action | Outcome | Delta |
//! |--------|---------|-------|
//! | `forward` | moved or bumped a wall | -1 |
//! | `forward` | moved into a pit or the live wumpus | -1 - 1000 |
//! | `left` / `right` | turned | -1 |
//! | `shoot` | hit or miss | -10 |
//! | `grab` | picked up the gold | +1000 |
//! | `climb` | left the cave | 0 |
//!
//! # Ownership
//!
//! [`resolve`] never mutates its input. It works on a copy and hands the
//! new snapshot back inside the [`ActionOutcome`]; the caller decides
//! whether to store it. A failed action therefore cannot leave a
//! half-applied session behind.

use serde::Serialize;
use tracing::{debug, info};
use wumpus_types::{Action, GameSession, Position};
use wumpus_world::Grid;

use crate::error::GameError;
use crate::perception::perceive;

/// Score change for stepping forward, whether or not a wall is hit.
pub const MOVE_COST: i64 = -1;

/// Score change for a 90 degree turn.
pub const TURN_COST: i64 = -1;

/// Score change for firing the arrow.
pub const SHOT_COST: i64 = -10;

/// Score change for picking up the gold.
pub const GOLD_REWARD: i64 = 1000;

/// Score change for climbing out. Escaping carries no bonus of its own.
pub const CLIMB_REWARD: i64 = 0;

/// Extra score change when the player dies.
pub const DEATH_PENALTY: i64 = -1000;

/// What an action did, in game terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionEvent {
    /// Stepped into a new, safe cell.
    Moved,
    /// Walked into a wall and stayed put.
    Bumped,
    /// Rotated counter-clockwise.
    TurnedLeft,
    /// Rotated clockwise.
    TurnedRight,
    /// The arrow killed the wumpus.
    KilledWumpus,
    /// The arrow hit the wall.
    Missed,
    /// Picked up the gold.
    GrabbedGold,
    /// Climbed out carrying the gold.
    EscapedWithGold,
    /// Climbed out without the gold.
    EscapedEmptyHanded,
    /// Stepped into a pit.
    FellIntoPit,
    /// Stepped into the live wumpus's cell.
    EatenByWumpus,
}

impl ActionEvent {
    /// Player-facing description.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Moved => "Moved forward",
            Self::Bumped => "Bump! Hit the wall.",
            Self::TurnedLeft => "Turned left",
            Self::TurnedRight => "Turned right",
            Self::KilledWumpus => "You killed the Wumpus!",
            Self::Missed => "Arrow missed",
            Self::GrabbedGold => "Grabbed the gold!",
            Self::EscapedWithGold => "You escaped with the gold! Victory!",
            Self::EscapedEmptyHanded => "You escaped but without the gold.",
            Self::FellIntoPit => "You fell into a pit! Game Over.",
            Self::EatenByWumpus => "You were eaten by the Wumpus! Game Over.",
        }
    }

    /// Whether this event ends the game.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::EscapedWithGold
                | Self::EscapedEmptyHanded
                | Self::FellIntoPit
                | Self::EatenByWumpus
        )
    }
}

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// What happened.
    pub event: ActionEvent,
    /// Total score change, death penalty included.
    pub score_delta: i64,
    /// The session after the action.
    pub session: GameSession,
}

impl ActionOutcome {
    /// Player-facing description of what happened.
    pub const fn message(&self) -> &'static str {
        self.event.message()
    }
}

/// Per-action effect before bookkeeping.
struct Effect {
    event: ActionEvent,
    delta: i64,
    bump: bool,
    scream: bool,
}

impl Effect {
    const fn plain(event: ActionEvent, delta: i64) -> Self {
        Self {
            event,
            delta,
            bump: false,
            scream: false,
        }
    }
}

/// Apply one action to `session`.
///
/// On success the returned outcome holds the new snapshot: the move count
/// is incremented, the score delta applied, and the percepts recomputed
/// for the player's (possibly new) cell with this action's `bump` and
/// `scream` layered on top.
///
/// # Errors
///
/// - [`GameError::GameOver`] if the session has already ended.
/// - [`GameError::NoArrows`] when shooting with an empty quiver.
/// - [`GameError::NoGoldHere`] when grabbing away from uncollected gold.
/// - [`GameError::NotAtExit`] when climbing anywhere but `(0, 0)`.
pub fn resolve(session: &GameSession, action: Action) -> Result<ActionOutcome, GameError> {
    if session.game_over {
        return Err(GameError::GameOver);
    }

    let mut next = session.clone();
    let effect = match action {
        Action::Forward => move_forward(&mut next),
        Action::Left => {
            next.player.direction = next.player.direction.turn_left();
            Effect::plain(ActionEvent::TurnedLeft, TURN_COST)
        }
        Action::Right => {
            next.player.direction = next.player.direction.turn_right();
            Effect::plain(ActionEvent::TurnedRight, TURN_COST)
        }
        Action::Shoot => shoot(&mut next)?,
        Action::Grab => grab(&mut next)?,
        Action::Climb => climb(&mut next)?,
    };

    next.moves = next.moves.saturating_add(1);
    next.score = next.score.saturating_add(effect.delta);

    let mut percepts = perceive(&next);
    percepts.bump = effect.bump;
    percepts.scream = effect.scream;
    next.percepts = percepts;

    if effect.event.is_terminal() {
        info!(
            game_id = %next.id,
            event = ?effect.event,
            won = next.won,
            score = next.score,
            moves = next.moves,
            "Game over"
        );
    } else {
        debug!(
            game_id = %next.id,
            action = %action,
            event = ?effect.event,
            score_delta = effect.delta,
            "Action resolved"
        );
    }

    Ok(ActionOutcome {
        event: effect.event,
        score_delta: effect.delta,
        session: next,
    })
}

fn move_forward(session: &mut GameSession) -> Effect {
    let grid = Grid::new(session.grid_size);
    let Some(target) = grid.step(session.player.position(), session.player.direction) else {
        return Effect {
            event: ActionEvent::Bumped,
            delta: MOVE_COST,
            bump: true,
            scream: false,
        };
    };

    session.player.set_position(target);
    session.mark_visited(target);

    match hazard_at(session, target) {
        Some(death) => {
            session.player.alive = false;
            session.game_over = true;
            session.won = false;
            Effect::plain(death, MOVE_COST.saturating_add(DEATH_PENALTY))
        }
        None => Effect::plain(ActionEvent::Moved, MOVE_COST),
    }
}

/// The fatal event waiting at `pos`, if any. Pits are checked first.
fn hazard_at(session: &GameSession, pos: Position) -> Option<ActionEvent> {
    if session.is_pit(pos) {
        Some(ActionEvent::FellIntoPit)
    } else if session.wumpus.alive && session.wumpus.position() == pos {
        Some(ActionEvent::EatenByWumpus)
    } else {
        None
    }
}

fn shoot(session: &mut GameSession) -> Result<Effect, GameError> {
    session.player.arrows = session
        .player
        .arrows
        .checked_sub(1)
        .ok_or(GameError::NoArrows)?;

    let grid = Grid::new(session.grid_size);
    let target = session.wumpus.position();
    let hit = session.wumpus.alive
        && grid
            .ray(session.player.position(), session.player.direction)
            .any(|cell| cell == target);

    if hit {
        session.wumpus.alive = false;
        Ok(Effect {
            event: ActionEvent::KilledWumpus,
            delta: SHOT_COST,
            bump: false,
            scream: true,
        })
    } else {
        Ok(Effect::plain(ActionEvent::Missed, SHOT_COST))
    }
}

fn grab(session: &mut GameSession) -> Result<Effect, GameError> {
    if session.gold.collected || session.gold.position() != session.player.position() {
        return Err(GameError::NoGoldHere);
    }
    session.gold.collected = true;
    session.player.has_gold = true;
    Ok(Effect::plain(ActionEvent::GrabbedGold, GOLD_REWARD))
}

fn climb(session: &mut GameSession) -> Result<Effect, GameError> {
    if session.player.position() != Position::ORIGIN {
        return Err(GameError::NotAtExit);
    }
    session.game_over = true;
    session.won = session.player.has_gold;
    let event = if session.won {
        ActionEvent::EscapedWithGold
    } else {
        ActionEvent::EscapedEmptyHanded
    };
    Ok(Effect::plain(event, CLIMB_REWARD))
}
