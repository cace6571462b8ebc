//! Hangman
//!
//! A single-player word-guessing game served as a JSON HTTP API.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use hangman::core::{Game, GameId, GameStatus, Guess, SecretWord};
//!
//! let secret = SecretWord::new("cat").unwrap();
//! let mut game = Game::new(GameId::new(1), secret, Utc::now());
//!
//! for letter in ["c", "a", "t"] {
//!     game.apply_guess(Guess::parse(Some(letter)).unwrap(), Utc::now()).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.mask(), "CAT");
//! ```

// Core domain types and the guessing state machine
pub mod core;

// Word lists
pub mod wordlists;

// Game persistence
pub mod store;

// Load → guess → persist orchestration
pub mod service;

// HTTP transport
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
