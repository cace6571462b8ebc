//! JSON snapshot game store
//!
//! Keeps every game in memory and rewrites a JSON snapshot after each
//! change. A change only becomes visible once its snapshot is on disk.

use super::memory::GameTable;
use super::{GameStore, StoreError};
use crate::core::{Game, GameId, SecretWord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    last_id: u64,
    games: Vec<Game>,
}

/// Game store persisted to a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: Mutex<GameTable>,
}

impl FileStore {
    /// Open the snapshot at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let table = if path.exists() {
            let bytes = fs::read(&path)?;
            let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
            info!(
                path = %path.display(),
                games = snapshot.games.len(),
                "Loaded game snapshot"
            );
            GameTable::from_parts(snapshot.last_id, snapshot.games)?
        } else {
            info!(path = %path.display(), "No snapshot found, starting empty");
            GameTable::default()
        };

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    /// Location of the snapshot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `table` to a sibling temp file, then rename it into place
    fn persist(&self, table: &GameTable) -> Result<(), StoreError> {
        let mut games = table.sorted();
        games.sort_by_key(Game::id);
        let snapshot = Snapshot {
            last_id: table.last_id(),
            games,
        };

        let json = serde_json::to_vec_pretty(&snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), games = snapshot.games.len(), "Snapshot written");
        Ok(())
    }
}

impl GameStore for FileStore {
    fn create(&self, secret: SecretWord, now: DateTime<Utc>) -> Result<Game, StoreError> {
        let mut table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        let mut staged = table.clone();
        let game = staged.create(secret, now)?;
        self.persist(&staged)?;
        *table = staged;
        Ok(game)
    }

    fn get(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        let table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(table.get(id))
    }

    fn list(&self) -> Result<Vec<Game>, StoreError> {
        let table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(table.sorted())
    }

    fn update(&self, game: &Game) -> Result<(), StoreError> {
        let mut table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        let mut staged = table.clone();
        staged.update(game)?;
        self.persist(&staged)?;
        *table = staged;
        Ok(())
    }
}
