//! Percept calculation.
//!
//! Percepts are the player's only window onto the cave. The calculator
//! derives `stench`, `breeze` and `glitter` from the player's cell and the
//! layout. It never sets `bump` or `scream`: those belong to the action
//! that produced them and are layered on by the resolver.

use wumpus_types::{GameSession, Percepts};
use wumpus_world::Grid;

/// Compute position-derived percepts for the player's current cell.
///
/// - `stench`: the wumpus is alive and orthogonally adjacent.
/// - `breeze`: any pit is orthogonally adjacent.
/// - `glitter`: the gold is uncollected, the player is not carrying it, and
///   it lies in the player's cell.
///
/// `bump` and `scream` are always `false` in the result. The function is
/// pure: the same session always yields the same percepts.
pub fn perceive(session: &GameSession) -> Percepts {
    let grid = Grid::new(session.grid_size);
    let here = session.player.position();

    let stench = session.wumpus.alive && grid.adjacent(here, session.wumpus.position());
    let breeze = grid.neighbors(here).any(|cell| session.is_pit(cell));
    let glitter = !session.gold.collected
        && !session.player.has_gold
        && session.gold.position() == here;

    Percepts {
        stench,
        breeze,
        glitter,
        bump: false,
        scream: false,
    }
}
