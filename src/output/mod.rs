//! Terminal output formatting
//!
//! Display utilities for the `play` command.

pub mod display;
pub mod formatters;

pub use display::{render_banner, render_game, render_outcome, render_result};
