//! Command implementations

pub mod play;
pub mod serve;

pub use play::run_play;
pub use serve::{ServeConfig, run_serve};

use crate::core::SecretWord;
use crate::wordlists::{DICTIONARY, loader};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Secret words from `path`, or the embedded dictionary when `None`
///
/// # Errors
///
/// Fails if the file cannot be read or yields no valid words.
pub fn load_words(path: Option<&Path>) -> Result<Vec<SecretWord>> {
    let words = match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => loader::words_from_slice(DICTIONARY),
    };

    if words.is_empty() {
        bail!("word list contains no usable words");
    }
    Ok(words)
}
