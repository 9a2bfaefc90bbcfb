//! The game service: session lifecycle over an injected store.
//!
//! [`GameService`] is what transports talk to. It owns the RNG used for
//! cave generation and a boxed [`SessionStore`], and wires together the
//! generator, the resolver and the store:
//!
//! - `create` generates a cave, builds the session and stores it.
//! - `act` loads a session, resolves one action and stores the result.
//! - `sweep_expired` drops sessions past the retention window.
//!
//! The service takes `&mut self` for every write, so wrapping it in a
//! single lock is enough to serialize actions on the same session.

use chrono::{DateTime, Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use wumpus_types::{Action, GameId, GameSession};
use wumpus_world::WorldLayout;

use crate::config::{GameSettings, SessionSettings};
use crate::error::GameError;
use crate::resolver::{ActionOutcome, resolve};
use crate::session::new_session;
use crate::store::SessionStore;

/// Session lifecycle operations over a pluggable store.
pub struct GameService {
    store: Box<dyn SessionStore>,
    rng: StdRng,
    default_grid_size: u8,
    ttl: Duration,
}

impl core::fmt::Debug for GameService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameService")
            .field("sessions", &self.store.len())
            .field("default_grid_size", &self.default_grid_size)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl GameService {
    /// Create a service over `store`.
    ///
    /// Caves are drawn from a seeded RNG when `game.seed` is set, otherwise
    /// from OS entropy.
    pub fn new(
        store: Box<dyn SessionStore>,
        game: &GameSettings,
        sessions: &SessionSettings,
    ) -> Self {
        let rng = game
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let ttl_seconds = i64::try_from(sessions.ttl_seconds).unwrap_or(i64::MAX);
        Self {
            store,
            rng,
            default_grid_size: game.default_grid_size,
            ttl: Duration::try_seconds(ttl_seconds).unwrap_or(Duration::MAX),
        }
    }

    /// Start a new game with a random cave.
    ///
    /// `grid_size` falls back to the configured default when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::World`] if the grid size is outside 4..=10.
    pub fn create(&mut self, grid_size: Option<u8>) -> Result<GameSession, GameError> {
        let size = grid_size.unwrap_or(self.default_grid_size);
        let layout = wumpus_world::generate(size, &mut self.rng)?;
        Ok(self.insert(layout, Utc::now()))
    }

    /// Start a new game on a fixed cave.
    ///
    /// # Errors
    ///
    /// Propagates layout validation failures as [`GameError::World`].
    pub fn create_with_layout(
        &mut self,
        layout: WorldLayout,
        created_at: DateTime<Utc>,
    ) -> Result<GameSession, GameError> {
        let layout = WorldLayout::fixed(layout.grid_size, layout.wumpus, layout.gold, layout.pits)?;
        Ok(self.insert(layout, created_at))
    }

    fn insert(&mut self, layout: WorldLayout, created_at: DateTime<Utc>) -> GameSession {
        let session = new_session(GameId::new(), layout, created_at);
        info!(
            game_id = %session.id,
            grid_size = session.grid_size,
            pit_count = session.pits.len(),
            "Game created"
        );
        self.store.put(session.clone());
        session
    }

    /// Fetch a session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown id.
    pub fn get(&self, id: GameId) -> Result<GameSession, GameError> {
        self.store.get(id).ok_or(GameError::NotFound(id))
    }

    /// Apply an action given as a wire token.
    ///
    /// # Errors
    ///
    /// - [`GameError::MissingAction`] if `token` is absent or blank.
    /// - [`GameError::NotFound`] for an unknown id.
    /// - [`GameError::UnknownAction`] for an unrecognised token.
    /// - Any rule failure from [`resolve`]. The stored session is left
    ///   untouched on every error.
    pub fn act(&mut self, id: GameId, token: Option<&str>) -> Result<ActionOutcome, GameError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(GameError::MissingAction)?;
        let session = self.get(id)?;
        let action =
            Action::parse(token).ok_or_else(|| GameError::UnknownAction(token.to_owned()))?;
        self.apply(&session, action)
    }

    fn apply(&mut self, session: &GameSession, action: Action) -> Result<ActionOutcome, GameError> {
        let outcome = resolve(session, action).inspect_err(|e| {
            debug!(game_id = %session.id, action = %action, error = %e, "Action rejected");
        })?;
        self.store.put(outcome.session.clone());
        Ok(outcome)
    }

    /// Delete a session outright.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: GameId) -> Result<(), GameError> {
        if self.store.delete(id) {
            info!(game_id = %id, "Game deleted");
            Ok(())
        } else {
            Err(GameError::NotFound(id))
        }
    }

    /// Remove every session older than the retention window as of `now`.
    ///
    /// Returns the number of sessions removed.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let cutoff = now.checked_sub_signed(self.ttl).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let removed = self.store.sweep(cutoff);
        if removed > 0 {
            info!(removed, remaining = self.store.len(), "Expired games swept");
        }
        removed
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use wumpus_types::Position;

    use super::*;
    use crate::error::ErrorKind;
    use crate::store::InMemorySessionStore;

    fn service() -> GameService {
        let game = GameSettings {
            default_grid_size: 4,
            seed: Some(11),
        };
        GameService::new(
            Box::new(InMemorySessionStore::new()),
            &game,
            &SessionSettings::default(),
        )
    }

    fn fixed_layout() -> WorldLayout {
        WorldLayout {
            grid_size: 4,
            start: Position::ORIGIN,
            wumpus: Position::new(1, 0),
            gold: Position::new(0, 2),
            pits: [Position::new(2, 2)].into_iter().collect(),
        }
    }

    #[test]
    fn create_uses_default_size() {
        let mut svc = service();
        let game = svc.create(None);
        assert!(matches!(game, Ok(ref g) if g.grid_size == 4));
        assert_eq!(svc.session_count(), 1);
    }

    #[test]
    fn create_rejects_bad_size() {
        let mut svc = service();
        for size in [0, 3, 11, 255] {
            let err = svc.create(Some(size));
            assert!(matches!(err, Err(ref e) if e.kind() == ErrorKind::InvalidInput));
        }
        assert_eq!(svc.session_count(), 0);
    }

    #[test]
    fn seeded_services_generate_identical_caves() {
        let a = service().create(Some(8));
        let b = service().create(Some(8));
        let (Ok(a), Ok(b)) = (a, b) else {
            panic!("creation should succeed");
        };
        assert_eq!(a.wumpus, b.wumpus);
        assert_eq!(a.gold, b.gold);
        assert_eq!(a.pits, b.pits);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn act_persists_new_state() {
        let mut svc = service();
        let Ok(game) = svc.create_with_layout(fixed_layout(), Utc::now()) else {
            panic!("fixed layout is valid");
        };

        let outcome = svc.act(game.id, Some("FORWARD"));
        assert!(outcome.is_ok());

        let stored = svc.get(game.id);
        assert!(matches!(stored, Ok(ref s) if s.moves == 1 && s.score == -1));
    }

    #[test]
    fn failed_action_leaves_store_untouched() {
        let mut svc = service();
        let Ok(game) = svc.create_with_layout(fixed_layout(), Utc::now()) else {
            panic!("fixed layout is valid");
        };

        assert!(matches!(svc.act(game.id, Some("grab")), Err(GameError::NoGoldHere)));
        assert_eq!(svc.get(game.id).ok(), Some(game));
    }

    #[test]
    fn empty_quiver_shot_keeps_stored_state() {
        let mut svc = service();
        let Ok(game) = svc.create_with_layout(fixed_layout(), Utc::now()) else {
            panic!("fixed layout is valid");
        };

        assert!(svc.act(game.id, Some("shoot")).is_ok());
        assert!(matches!(svc.act(game.id, Some("shoot")), Err(GameError::NoArrows)));

        let Ok(stored) = svc.get(game.id) else {
            panic!("session should still exist");
        };
        assert_eq!(stored.score, -10);
        assert_eq!(stored.player.arrows, 0);
        assert_eq!(stored.moves, 1);
    }

    #[test]
    fn act_validates_token() {
        let mut svc = service();
        let Ok(game) = svc.create(None) else {
            panic!("creation should succeed");
        };
        assert!(matches!(svc.act(game.id, None), Err(GameError::MissingAction)));
        assert!(matches!(svc.act(game.id, Some("  ")), Err(GameError::MissingAction)));
        assert!(matches!(
            svc.act(game.id, Some("dance")),
            Err(GameError::UnknownAction(ref t)) if t == "dance"
        ));
    }

    #[test]
    fn act_on_unknown_game() {
        let mut svc = service();
        let id = GameId::new();
        assert!(matches!(svc.act(id, Some("left")), Err(GameError::NotFound(x)) if x == id));
        assert!(matches!(svc.act(id, Some("dance")), Err(GameError::NotFound(_))));
    }

    #[test]
    fn delete_removes_session() {
        let mut svc = service();
        let Ok(game) = svc.create(None) else {
            panic!("creation should succeed");
        };
        assert!(svc.delete(game.id).is_ok());
        assert!(matches!(svc.get(game.id), Err(GameError::NotFound(_))));
        assert!(matches!(svc.delete(game.id), Err(GameError::NotFound(_))));
    }

    #[test]
    fn sweep_expires_after_ttl() {
        let mut svc = service();
        let now = Utc::now();
        let old = svc.create_with_layout(fixed_layout(), now - Duration::hours(30));
        let fresh = svc.create_with_layout(fixed_layout(), now - Duration::hours(2));
        let (Ok(old), Ok(fresh)) = (old, fresh) else {
            panic!("fixed layout is valid");
        };

        assert_eq!(svc.sweep_expired(now), 1);
        assert!(svc.get(old.id).is_err());
        assert!(svc.get(fresh.id).is_ok());
        assert_eq!(svc.sweep_expired(now), 0);
    }

    #[test]
    fn full_game_through_service() {
        let mut svc = service();
        let Ok(game) = svc.create_with_layout(fixed_layout(), Utc::now()) else {
            panic!("fixed layout is valid");
        };
        for token in ["forward", "forward", "grab", "left", "left", "forward", "forward"] {
            assert!(svc.act(game.id, Some(token)).is_ok(), "{token} failed");
        }
        let outcome = svc.act(game.id, Some("climb"));
        let Ok(outcome) = outcome else {
            panic!("climb should succeed");
        };
        assert!(outcome.session.won);
        assert!(matches!(svc.act(game.id, Some("left")), Err(GameError::GameOver)));
    }
}
