//! Game persistence
//!
//! The engine never touches storage directly. The service talks to a
//! [`GameStore`], which assigns identifiers, keeps records, and lists them by
//! recency. Two implementations ship: [`MemoryStore`] and [`FileStore`].

mod file;
mod memory;

use crate::core::{Game, GameId, SecretWord};
use chrono::{DateTime, Utc};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("game {0} does not exist")]
    Missing(GameId),
    #[error("store lock poisoned")]
    Poisoned,
    #[error("game identifiers exhausted")]
    IdsExhausted,
    #[error("stored game {0} is inconsistent")]
    Corrupt(GameId),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Storage collaborator for games
///
/// Implementations must be safe to share across request handlers.
/// `update` is last-write-wins; callers that need read-modify-write
/// atomicity serialize on the game id themselves.
pub trait GameStore: Send + Sync {
    /// Assign the next identifier and store a fresh game for `secret`
    fn create(&self, secret: SecretWord, now: DateTime<Utc>) -> Result<Game, StoreError>;

    /// Fetch a game by identifier
    fn get(&self, id: GameId) -> Result<Option<Game>, StoreError>;

    /// All games, most recently updated first (ties: highest id first)
    fn list(&self) -> Result<Vec<Game>, StoreError>;

    /// Replace the stored copy of an existing game
    fn update(&self, game: &Game) -> Result<(), StoreError>;
}

/// Newest-first ordering shared by every store
pub(crate) fn sort_by_recency(games: &mut [Game]) {
    games.sort_by(|a, b| {
        b.updated_at()
            .cmp(&a.updated_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}
