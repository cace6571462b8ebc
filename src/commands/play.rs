//! Terminal play mode
//!
//! Plays one game through the same service the HTTP server uses, reading a
//! letter per line.

use crate::core::GameStatus;
use crate::output::{render_banner, render_game, render_outcome, render_result};
use crate::service::{GameService, ServiceError};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Run one game against `input`, writing the board to `output`
///
/// Returns the final status; `InProgress` when the player quits or input ends.
///
/// # Errors
///
/// Returns an error on I/O failure or if the store cannot create or save the
/// game. Rejected guesses are reported to the player, not returned.
pub fn run_play<R: BufRead, W: Write>(
    service: &GameService,
    mut input: R,
    mut output: W,
) -> Result<GameStatus> {
    writeln!(output, "{}", render_banner())?;

    let mut game = service.new_game()?;

    loop {
        writeln!(output, "{}", render_game(&game))?;

        if game.is_over() {
            writeln!(output, "{}", render_result(&game))?;
            return Ok(game.status());
        }

        let Some(line) = get_user_input(&mut input, &mut output, "Guess a letter")? else {
            break;
        };
        if matches!(line.as_str(), "quit" | "exit") {
            break;
        }

        match service.guess(game.id(), Some(line.as_str())) {
            Ok(report) => {
                writeln!(output, "{}", render_outcome(&line, report.outcome))?;
                game = report.game;
            }
            Err(ServiceError::Guess(err)) => writeln!(output, "❌ {err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(game.status())
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
