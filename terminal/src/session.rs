use std::io::{self, BufRead, Write};

use minesweeper_core::{Action, Game, GameStatus};
use tracing::{debug, warn};

use crate::render;

/// Reads one command per line until the game ends or input runs out.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    out: &mut W,
) -> io::Result<GameStatus> {
    let mut buf = Vec::new();
    let mut message = None;

    while !game.status().is_finished() {
        render::clear(out)?;
        render::draw(out, &game.board().render())?;
        if let Some(message) = message.take() {
            writeln!(out, "{message}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            warn!("Input closed before the game ended");
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        let result = line
            .parse::<Action>()
            .map_err(|err| err.to_string())
            .and_then(|action| game.execute(action).map_err(|err| err.to_string()));
        if let Err(err) = result {
            debug!(%line, %err, "Rejected command");
            message = Some(err);
        }
    }

    Ok(game.status())
}

/// Opens the whole board and prints the outcome.
pub fn finish<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    game.finish();
    render::clear(out)?;
    render::draw(out, &game.board().render())?;

    let verdict = match game.status() {
        GameStatus::Won => "YOU WON!",
        GameStatus::Lost => "BOOM! You hit a mine.",
        GameStatus::InGame => "Game abandoned.",
    };
    writeln!(out, "{verdict}")?;
    out.flush()
}
