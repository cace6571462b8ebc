//! Core domain types for hangman
//!
//! The guessing state machine and its inputs. Nothing here performs I/O;
//! callers supply the current time and the secret word.

mod game;
mod guess;
mod secret;

pub use game::{Game, GameId, GameStatus, GuessOutcome, MAX_ATTEMPTS};
pub use guess::{Guess, GuessError};
pub use secret::{MASK_CHAR, SecretWord, SecretWordError};
