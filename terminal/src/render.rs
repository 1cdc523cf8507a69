use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use minesweeper_core::MINE_SYMBOL;

pub const DEFAULT_COLOR: Color = Color::White;

/// Foreground color used to draw a board symbol.
pub fn color_for(symbol: char) -> Color {
    match symbol {
        MINE_SYMBOL => Color::DarkRed,
        '0' => Color::Grey,
        '1' => Color::Yellow,
        '2' => Color::DarkYellow,
        '3'..='9' => Color::Red,
        _ => DEFAULT_COLOR,
    }
}

pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    Ok(())
}

/// Writes rendered board text, coloring each symbol.
pub fn draw<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for symbol in text.chars() {
        if symbol == '\n' {
            out.queue(Print(symbol))?;
            continue;
        }
        out.queue(SetForegroundColor(color_for(symbol)))?.queue(Print(symbol))?;
    }
    out.queue(ResetColor)?;
    out.flush()
}
