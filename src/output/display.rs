//! Rendering of games for the terminal

use super::formatters::{create_progress_bar, letters_list, spaced_mask};
use crate::core::{Game, GameStatus, GuessOutcome, MAX_ATTEMPTS};
use colored::Colorize;

/// Title shown once when a game starts
#[must_use]
pub fn render_banner() -> String {
    let rule = "═".repeat(40);
    format!(
        "{}\n{}\n{}\n\nGuess one letter per line. Type 'quit' to leave.\n",
        rule.cyan(),
        "              HANGMAN".bright_cyan().bold(),
        rule.cyan()
    )
}

/// Current board: mask, used letters and attempts left
#[must_use]
pub fn render_game(game: &Game) -> String {
    let attempts = game.attempts_remaining();
    let bar = create_progress_bar(attempts, MAX_ATTEMPTS, 20);
    let bar = if attempts > 3 { bar.green() } else { bar.red() };

    format!(
        "\n  {}\n\n  Used:     {}\n  Attempts: {} {attempts}/{MAX_ATTEMPTS}\n",
        spaced_mask(game.mask()).bright_yellow().bold(),
        letters_list(game.used_letters()),
        bar,
    )
}

/// One-line feedback for an accepted guess
#[must_use]
pub fn render_outcome(letter: &str, outcome: GuessOutcome) -> String {
    let letter = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::Hit => format!("✓ {letter} is in the word").green().to_string(),
        GuessOutcome::Miss => format!("✗ No {letter}").red().to_string(),
    }
}

/// Closing line for a finished game, revealing the secret
#[must_use]
pub fn render_result(game: &Game) -> String {
    let secret = game.secret().text();
    match game.status() {
        GameStatus::Won => format!("🎉 You won! The word was {secret}")
            .green()
            .bold()
            .to_string(),
        GameStatus::Lost => format!("💀 Out of attempts. The word was {secret}")
            .red()
            .bold()
            .to_string(),
        GameStatus::InProgress => format!("Game {} left unfinished", game.id()),
    }
}
