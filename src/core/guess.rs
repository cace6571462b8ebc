//! Guess input validation
//!
//! Turns raw client input into a single uppercase letter, rejecting anything
//! else with the error the player sees.

use std::fmt;

/// Reasons a guess is rejected
///
/// Input errors (`MissingLetter`, `TooManyCharacters`, `NotAlphabetic`) come
/// from [`Guess::parse`]; state errors (`LetterAlreadyUsed`,
/// `GameAlreadyOver`) come from [`Game::apply_guess`](super::Game::apply_guess).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Missing a letter")]
    MissingLetter,
    #[error("Not so fast – only one letter at a time")]
    TooManyCharacters,
    #[error("That's not in the alphabet")]
    NotAlphabetic,
    #[error("Letter already used")]
    LetterAlreadyUsed,
    #[error("Game is already over")]
    GameAlreadyOver,
}

/// A validated guess: one uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guess(char);

impl Guess {
    /// Parse raw input into a guess
    ///
    /// Checks run in order: presence, length (in characters), then alphabet.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Guess, GuessError};
    ///
    /// assert_eq!(Guess::parse(Some("a")).unwrap().letter(), 'A');
    /// assert_eq!(Guess::parse(None), Err(GuessError::MissingLetter));
    /// assert_eq!(Guess::parse(Some("ab")), Err(GuessError::TooManyCharacters));
    /// assert_eq!(Guess::parse(Some("5")), Err(GuessError::NotAlphabetic));
    /// ```
    pub fn parse(input: Option<&str>) -> Result<Self, GuessError> {
        let input = input.ok_or(GuessError::MissingLetter)?;

        let mut chars = input.chars();
        let first = chars.next().ok_or(GuessError::MissingLetter)?;
        if chars.next().is_some() {
            return Err(GuessError::TooManyCharacters);
        }

        if !first.is_ascii_alphabetic() {
            return Err(GuessError::NotAlphabetic);
        }

        Ok(Self(first.to_ascii_uppercase()))
    }

    /// The uppercase letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
