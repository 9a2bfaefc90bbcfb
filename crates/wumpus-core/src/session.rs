//! Building a fresh [`GameSession`] from a cave layout.

use chrono::{DateTime, Utc};
use wumpus_types::{GameId, GameSession, Gold, Player, Wumpus};
use wumpus_world::WorldLayout;

use crate::perception::perceive;

/// Start a new game on `layout`.
///
/// The player stands at the entrance facing north with one arrow, only the
/// entrance is visited, the score is zero and the opening percepts are
/// already computed.
pub fn new_session(id: GameId, layout: WorldLayout, created_at: DateTime<Utc>) -> GameSession {
    let mut session = GameSession {
        id,
        grid_size: layout.grid_size,
        player: Player::at_entrance(),
        wumpus: Wumpus {
            x: layout.wumpus.x,
            y: layout.wumpus.y,
            alive: true,
        },
        gold: Gold {
            x: layout.gold.x,
            y: layout.gold.y,
            collected: false,
        },
        pits: layout.pits,
        visited: GameSession::fresh_visited(layout.grid_size),
        percepts: wumpus_types::Percepts::default(),
        score: 0,
        moves: 0,
        game_over: false,
        won: false,
        created_at,
    };
    session.percepts = perceive(&session);
    session
}

#[cfg(test)]
mod tests {
    use wumpus_types::Position;

    use super::*;

    #[test]
    fn new_session_starts_clean() {
        let layout = WorldLayout::fixed(
            4,
            Position::new(1, 0),
            Position::new(2, 2),
            [Position::new(0, 1)],
        );
        assert!(layout.is_ok());
        let Ok(layout) = layout else { return };

        let s = new_session(GameId::new(), layout, Utc::now());
        assert_eq!(s.player.position(), Position::ORIGIN);
        assert_eq!(s.score, 0);
        assert_eq!(s.moves, 0);
        assert!(!s.game_over);
        assert!(!s.won);
        assert_eq!(s.visited.iter().flatten().filter(|cell| **cell).count(), 1);
        assert_eq!(s.visited.first().and_then(|row| row.first()), Some(&true));
        // Wumpus east and pit north of the entrance.
        assert!(s.percepts.stench);
        assert!(s.percepts.breeze);
        assert!(!s.percepts.glitter);
    }
}
