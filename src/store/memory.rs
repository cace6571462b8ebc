//! In-memory game store

use super::{GameStore, StoreError, sort_by_recency};
use crate::core::{Game, GameId, SecretWord};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use std::sync::RwLock;

/// Games keyed by id plus the id counter
///
/// Shared by [`MemoryStore`] and the file-backed store.
#[derive(Debug, Clone, Default)]
pub(crate) struct GameTable {
    last_id: u64,
    games: FxHashMap<GameId, Game>,
}

impl GameTable {
    /// Rebuild a table from stored games, rejecting any that could not
    /// have come out of play
    pub(crate) fn from_parts(
        last_id: u64,
        games: impl IntoIterator<Item = Game>,
    ) -> Result<Self, StoreError> {
        let mut table = FxHashMap::default();
        for game in games {
            if !game.is_consistent() {
                return Err(StoreError::Corrupt(game.id()));
            }
            if let Some(duplicate) = table.insert(game.id(), game) {
                return Err(StoreError::Corrupt(duplicate.id()));
            }
        }
        // Never hand out an id that is already taken
        let last_id = table
            .keys()
            .map(|id| id.value())
            .max()
            .unwrap_or(0)
            .max(last_id);
        Ok(Self {
            last_id,
            games: table,
        })
    }

    pub(crate) const fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Build and insert a new game under the next id
    pub(crate) fn create(
        &mut self,
        secret: SecretWord,
        now: DateTime<Utc>,
    ) -> Result<Game, StoreError> {
        let id = GameId::new(self.last_id)
            .next()
            .ok_or(StoreError::IdsExhausted)?;
        let game = Game::new(id, secret, now);
        self.last_id = id.value();
        self.games.insert(id, game.clone());
        Ok(game)
    }

    pub(crate) fn get(&self, id: GameId) -> Option<Game> {
        self.games.get(&id).cloned()
    }

    pub(crate) fn update(&mut self, game: &Game) -> Result<(), StoreError> {
        let slot = self
            .games
            .get_mut(&game.id())
            .ok_or(StoreError::Missing(game.id()))?;
        *slot = game.clone();
        Ok(())
    }

    /// Games ordered newest first
    pub(crate) fn sorted(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self.games.values().cloned().collect();
        sort_by_recency(&mut games);
        games
    }
}

/// Game store that lives for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<GameTable>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn create(&self, secret: SecretWord, now: DateTime<Utc>) -> Result<Game, StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        table.create(secret, now)
    }

    fn get(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.get(id))
    }

    fn list(&self) -> Result<Vec<Game>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.sorted())
    }

    fn update(&self, game: &Game) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        table.update(game)
    }
}
