//! Secret word representation
//!
//! A `SecretWord` stores the uppercased word the player is trying to reveal,
//! along with the set of distinct letters it contains.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Placeholder shown for every letter that has not been revealed yet
pub const MASK_CHAR: char = '_';

/// A hangman secret: uppercase ASCII letters and spaces, at least one letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord {
    text: String,
    letters: BTreeSet<char>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretWordError {
    #[error("Secret word must not be empty")]
    Empty,
    #[error("Secret word must contain at least one letter")]
    NoLetters,
    #[error("Secret word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `SecretWordError` if:
    /// - The word is empty
    /// - It contains anything other than ASCII letters and spaces
    /// - It consists of spaces only
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("New York").unwrap();
    /// assert_eq!(word.text(), "NEW YORK");
    ///
    /// assert!(SecretWord::new("R2D2").is_err());
    /// assert!(SecretWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretWordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| c != ' ' && !c.is_ascii_uppercase()) {
            return Err(SecretWordError::InvalidCharacter(bad));
        }

        let letters: BTreeSet<char> = text.chars().filter(|&c| c != ' ').collect();
        if letters.is_empty() {
            return Err(SecretWordError::NoLetters);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific (uppercase) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters of the word, spaces excluded
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &BTreeSet<char> {
        &self.letters
    }

    /// Render the word with every letter outside `revealed` replaced by `_`
    ///
    /// Spaces are always shown.
    #[must_use]
    pub fn mask_with(&self, revealed: &BTreeSet<char>) -> String {
        self.text
            .chars()
            .map(|c| {
                if c == ' ' || revealed.contains(&c) {
                    c
                } else {
                    MASK_CHAR
                }
            })
            .collect()
    }
}

impl TryFrom<String> for SecretWord {
    type Error = SecretWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.text
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
