//! Wire representation of a game
//!
//! The only shape a game takes on its way to a client. It has no field for
//! the secret word, so the secret cannot leak through serialization.

use crate::core::{Game, GameId, GameStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Client-visible game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_id: GameId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_word: String,
    pub letters_used: Vec<char>,
    pub guesses_remaining: u8,
    pub state: GameStatus,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id(),
            created_at: game.created_at(),
            updated_at: game.updated_at(),
            display_word: game.mask().to_owned(),
            letters_used: game.used_letters().iter().copied().collect(),
            guesses_remaining: game.attempts_remaining(),
            state: game.status(),
        }
    }
}
