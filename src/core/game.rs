//! Hangman game state machine
//!
//! A [`Game`] moves from `InProgress` to either `Won` (every letter of the
//! secret guessed) or `Lost` (attempts exhausted). Both end states are final.

use super::guess::{Guess, GuessError};
use super::secret::SecretWord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Wrong guesses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 10;

/// Store-assigned game identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier handed out after this one, `None` once `u64` is used up
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// Whether an accepted guess was in the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

/// A single hangman game
///
/// Invariants maintained by [`Game::apply_guess`]:
/// - `mask` has the same length as the secret
/// - a letter is shown in `mask` iff it was guessed (or the game is won)
/// - `Won` implies `mask == secret`, `Lost` implies zero attempts left
/// - nothing changes once the game is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    secret: SecretWord,
    mask: String,
    used_letters: BTreeSet<char>,
    attempts_remaining: u8,
    status: GameStatus,
}

impl Game {
    /// Start a fresh game with every letter hidden
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use hangman::core::{Game, GameId, GameStatus, SecretWord, MAX_ATTEMPTS};
    ///
    /// let secret = SecretWord::new("new york").unwrap();
    /// let game = Game::new(GameId::new(1), secret, Utc::now());
    ///
    /// assert_eq!(game.mask(), "___ ____");
    /// assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    #[must_use]
    pub fn new(id: GameId, secret: SecretWord, now: DateTime<Utc>) -> Self {
        let used_letters = BTreeSet::new();
        let mask = secret.mask_with(&used_letters);

        Self {
            id,
            created_at: now,
            updated_at: now,
            secret,
            mask,
            used_letters,
            attempts_remaining: MAX_ATTEMPTS,
            status: GameStatus::InProgress,
        }
    }

    /// Apply a validated guess
    ///
    /// A letter that has already been used is rejected first, whatever the
    /// game state; any other guess on a finished game is `GameAlreadyOver`.
    /// On error the game is left untouched.
    ///
    /// # Errors
    /// - `GuessError::LetterAlreadyUsed` if the letter was guessed before
    /// - `GuessError::GameAlreadyOver` if the game is won or lost
    pub fn apply_guess(
        &mut self,
        guess: Guess,
        now: DateTime<Utc>,
    ) -> Result<GuessOutcome, GuessError> {
        let letter = guess.letter();

        if self.used_letters.contains(&letter) {
            return Err(GuessError::LetterAlreadyUsed);
        }
        if self.status.is_terminal() {
            return Err(GuessError::GameAlreadyOver);
        }

        self.used_letters.insert(letter);

        let outcome = if self.secret.has_letter(letter) {
            if self.secret.letters().is_subset(&self.used_letters) {
                self.status = GameStatus::Won;
                self.mask = self.secret.text().to_owned();
            } else {
                self.mask = self.secret.mask_with(&self.used_letters);
            }
            GuessOutcome::Hit
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            if self.attempts_remaining == 0 {
                self.status = GameStatus::Lost;
            }
            GuessOutcome::Miss
        };

        self.updated_at = now;
        Ok(outcome)
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The secret word. Never send this to a client.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// The secret with unguessed letters replaced by `_`
    #[inline]
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the fields agree with what `apply_guess` could have produced
    ///
    /// Games read back from storage bypass the constructor, so stores check
    /// them with this before use.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let Some(spent) = MAX_ATTEMPTS.checked_sub(self.attempts_remaining) else {
            return false;
        };
        let misses = self
            .used_letters
            .iter()
            .filter(|&&c| !self.secret.has_letter(c))
            .count();
        let won = self.secret.letters().is_subset(&self.used_letters);
        let expected_status = if won {
            GameStatus::Won
        } else if self.attempts_remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        self.used_letters.iter().all(char::is_ascii_uppercase)
            && self.mask == self.secret.mask_with(&self.used_letters)
            && misses == usize::from(spent)
            && self.status == expected_status
            && self.created_at <= self.updated_at
    }
}
