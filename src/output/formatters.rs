//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Spread a mask out so blanks are countable: `CA_` becomes `C A _`
///
/// Word gaps widen to three spaces so multi-word secrets stay readable.
#[must_use]
pub fn spaced_mask(mask: &str) -> String {
    mask.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Used letters in alphabetical order, space separated
#[must_use]
pub fn letters_list(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u8, max: u8, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = (usize::from(value) * width / usize::from(max)).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
