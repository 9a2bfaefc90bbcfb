//! Session storage.
//!
//! The rules engine never reaches for a global map. The [`GameService`]
//! is handed a [`SessionStore`] and goes through it for every read and
//! write. [`InMemorySessionStore`] is the only implementation shipped; it
//! keeps sessions for the life of the process.
//!
//! [`GameService`]: crate::service::GameService

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use wumpus_types::{GameId, GameSession};

/// Keyed storage for game sessions.
///
/// Implementations hold sessions by value. The owner of the store is
/// responsible for serializing access; the trait itself has no locking.
pub trait SessionStore: Send + Sync {
    /// Fetch a copy of a session.
    fn get(&self, id: GameId) -> Option<GameSession>;

    /// Insert or replace a session under its own id.
    fn put(&mut self, session: GameSession);

    /// Remove a session. Returns `true` if it existed.
    fn delete(&mut self, id: GameId) -> bool;

    /// Remove every session created strictly before `cutoff` and return
    /// how many were removed.
    fn sweep(&mut self, cutoff: DateTime<Utc>) -> usize;

    /// Number of stored sessions.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local session store backed by a [`BTreeMap`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: BTreeMap<GameId, GameSession>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: GameId) -> Option<GameSession> {
        self.sessions.get(&id).cloned()
    }

    fn put(&mut self, session: GameSession) {
        self.sessions.insert(session.id, session);
    }

    fn delete(&mut self, id: GameId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    fn sweep(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.created_at >= cutoff);
        before.saturating_sub(self.sessions.len())
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
