//! Game service
//!
//! Request-scoped operations shared by the HTTP server and the terminal
//! mode: pick a word and create a game, read games, and run a guess through
//! validate → load → apply → persist.

use crate::core::{Game, GameId, Guess, GuessError, GuessOutcome, SecretWord};
use crate::store::{GameStore, StoreError};
use crate::wordlists::pick_word;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Errors surfaced by service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Guess(#[from] GuessError),
    #[error("Game not found")]
    NotFound(GameId),
    #[error("no secret words available")]
    NoWords,
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

/// An accepted guess and the game after it
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub game: Game,
    pub outcome: GuessOutcome,
}

/// Hangman operations over a shared store
pub struct GameService {
    store: Arc<dyn GameStore>,
    words: Vec<SecretWord>,
    rng: Mutex<StdRng>,
    locks: Mutex<FxHashMap<GameId, Arc<Mutex<()>>>>,
}

impl GameService {
    /// Create a service drawing secrets from `words`
    ///
    /// `seed` fixes the word sequence; `None` seeds from the OS.
    #[must_use]
    pub fn new(store: Arc<dyn GameStore>, words: Vec<SecretWord>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            store,
            words,
            rng: Mutex::new(rng),
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// Start a new game with a randomly chosen secret
    pub fn new_game(&self) -> Result<Game, ServiceError> {
        let secret = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            pick_word(&self.words, &mut *rng).ok_or(ServiceError::NoWords)?
        };

        let game = self.store.create(secret, Utc::now())?;
        info!(game_id = %game.id(), length = game.mask().len(), "Game created");
        Ok(game)
    }

    /// Fetch one game
    pub fn get_game(&self, id: GameId) -> Result<Game, ServiceError> {
        self.store.get(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// All games, most recently updated first
    pub fn list_games(&self) -> Result<Vec<Game>, ServiceError> {
        Ok(self.store.list()?)
    }

    /// Validate `letter` and apply it to game `id`
    ///
    /// Input is checked before the game is loaded, so a malformed letter is
    /// reported even for an unknown id. Guesses on the same game are
    /// serialized; guesses on different games run independently.
    pub fn guess(&self, id: GameId, letter: Option<&str>) -> Result<GuessReport, ServiceError> {
        let guess = Guess::parse(letter)?;
        // Unknown ids never get a lock entry
        self.get_game(id)?;

        let lock = self.lock_for(id);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.apply_locked(id, guess)
        };
        self.release_lock(id, &lock);
        result
    }

    /// Load, apply and store; the caller holds the lock for `id`
    fn apply_locked(&self, id: GameId, guess: Guess) -> Result<GuessReport, ServiceError> {
        let mut game = self.get_game(id)?;
        let outcome = game.apply_guess(guess, Utc::now()).inspect_err(|err| {
            debug!(game_id = %id, letter = %guess, error = %err, "Guess rejected");
        })?;
        self.store.update(&game)?;

        info!(
            game_id = %id,
            letter = %guess,
            ?outcome,
            status = game.status().label(),
            attempts_remaining = game.attempts_remaining(),
            "Guess applied"
        );
        Ok(GuessReport { game, outcome })
    }

    fn lock_for(&self, id: GameId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(id).or_default())
    }

    /// Drop the map entry for `id` once no other guess holds or awaits it
    fn release_lock(&self, id: GameId, lock: &Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // One reference in the map plus ours
        if Arc::strong_count(lock) == 2 {
            locks.remove(&id);
        }
    }

    #[cfg(test)]
    fn lock_entries(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
