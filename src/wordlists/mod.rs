//! Word lists for new games
//!
//! Provides the embedded dictionary and uniform selection of a secret word.

mod embedded;
pub mod loader;

use crate::core::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// Pick a secret uniformly at random from `candidates`
///
/// Returns `None` when the list is empty. The random source is injected so
/// tests can seed it.
///
/// # Examples
/// ```
/// use hangman::wordlists::{DICTIONARY, loader::words_from_slice, pick_word};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = words_from_slice(DICTIONARY);
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = pick_word(&words, &mut rng).unwrap();
/// assert!(words.contains(&secret));
/// ```
pub fn pick_word<R: Rng + ?Sized>(candidates: &[SecretWord], rng: &mut R) -> Option<SecretWord> {
    candidates.choose(rng).cloned()
}
