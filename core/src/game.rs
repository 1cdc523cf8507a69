use tracing::{debug, info};

use crate::{
    action::{Action, ActionKind},
    board::Board,
    error::{GameError, Result},
    field::Marker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InGame,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// Runs player actions against a board and tracks the outcome.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let status = if board.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InGame
        };

        Self { board, status }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn execute(&mut self, action: Action) -> Result<GameStatus> {
        if self.status.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        let pos = action.pos;
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.board.width(),
                height: self.board.height(),
            });
        }

        match action.kind {
            ActionKind::Open => {
                if self.board.reveal(pos)? {
                    info!(%pos, "Game lost");
                    self.status = GameStatus::Lost;
                    return Ok(self.status);
                }
            }
            ActionKind::Flag => self.toggle_marker(action, Marker::Flagged)?,
            ActionKind::Question => self.toggle_marker(action, Marker::Questioned)?,
        }

        if self.board.is_won() {
            info!(revealed = self.board.revealed_count(), "Game won");
            self.status = GameStatus::Won;
        }

        Ok(self.status)
    }

    fn toggle_marker(&mut self, action: Action, marker: Marker) -> Result<()> {
        let current = self.board.field(action.pos).map(|field| field.marker());
        let next = if current == Some(marker) {
            Marker::None
        } else {
            marker
        };

        debug!(pos = %action.pos, ?next, "Marker changed");
        self.board.set_marker(action.pos, next)
    }

    /// Opens every field for the final display.
    pub fn finish(&mut self) {
        self.board.open_all();
    }
}
