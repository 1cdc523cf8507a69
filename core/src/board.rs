use std::fmt;

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::{
    error::{GameError, Result},
    field::{Field, HIDDEN_SYMBOL, Marker},
    models::{GameParams, Placement, Pos},
};

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Largest number of fields a board may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Directions a reveal spreads from a zero field, in visiting order.
const CASCADE: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The minefield: a `width` x `height` grid of fields stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    requested_mines: usize,
    mines: usize,
    revealed: usize,
    fields: Vec<Field>,
}

impl Board {
    /// Generates a board using the thread-local random number generator.
    pub fn new(params: &GameParams) -> Result<Self> {
        Self::with_rng(params, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(params: &GameParams, rng: &mut R) -> Result<Self> {
        let mut board = Self::empty(params.width, params.height, params.mines)?;

        match params.placement {
            Placement::Exact => board.place_exact(rng),
            Placement::WithReplacement => board.place_with_replacement(rng),
        }

        if board.mines < board.requested_mines {
            warn!(
                requested = board.requested_mines,
                placed = board.mines,
                "Some mine draws landed on existing mines"
            );
        }
        debug!(
            "Generated {}x{} board with {} mines ({})",
            board.width, board.height, board.mines, params.placement
        );

        Ok(board)
    }

    /// Builds a board with mines at exactly the given positions. Duplicates are ignored.
    pub fn from_mines(width: usize, height: usize, mines: &[Pos]) -> Result<Self> {
        let mut board = Self::empty(width, height, 0)?;

        for &pos in mines {
            board.checked_index(pos)?;
        }
        for &pos in mines {
            board.add_mine(pos);
        }
        board.requested_mines = board.mines;

        Ok(board)
    }

    fn empty(width: usize, height: usize, mines: usize) -> Result<Self> {
        let invalid = GameError::InvalidConfiguration {
            width,
            height,
            mines,
        };
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0 && cells <= MAX_CELLS)
            .ok_or(invalid)?;
        if mines > cells {
            return Err(invalid);
        }

        Ok(Self {
            width,
            height,
            requested_mines: mines,
            mines: 0,
            revealed: 0,
            fields: vec![Field::default(); cells],
        })
    }

    // Selection sampling: each cell becomes a mine with probability mines_left / cells_left.
    fn place_exact<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cells = self.fields.len();
        let mut mines_left = self.requested_mines;

        for index in 0..cells {
            if mines_left == 0 {
                break;
            }

            let cells_left = cells - index;
            if rng.random_range(0..cells_left) < mines_left {
                self.add_mine(self.pos_of(index));
                mines_left -= 1;
            }
        }
    }

    fn place_with_replacement<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..self.requested_mines {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            let pos = Pos { x, y };

            if !self.add_mine(pos) {
                trace!(%pos, "Draw wasted on an existing mine");
            }
        }
    }

    /// Returns false when `pos` already holds a mine.
    fn add_mine(&mut self, pos: Pos) -> bool {
        let index = self.index(pos);
        if self.fields[index].mine {
            return false;
        }

        self.fields[index].mine = true;
        self.mines += 1;

        for delta in NEIGHBORS {
            if let Some(neighbor) = pos.offset(delta, self.width, self.height) {
                let index = self.index(neighbor);
                self.fields[index].adjacent += 1;
            }
        }

        true
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of fields that actually hold a mine.
    pub fn mine_count(&self) -> usize {
        self.mines
    }

    /// Mine count the board was configured with.
    pub fn requested_mines(&self) -> usize {
        self.requested_mines
    }

    /// Number of non-mine fields revealed by [`Board::reveal`].
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn field(&self, pos: Pos) -> Option<&Field> {
        if !self.contains(pos) {
            return None;
        }
        self.fields.get(self.index(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| (self.pos_of(index), field))
    }

    /// Reveals the field at `pos`, spreading over connected zero fields.
    ///
    /// Returns `Ok(true)` when `pos` is a mine; the mine itself stays hidden.
    pub fn reveal(&mut self, pos: Pos) -> Result<bool> {
        self.reveal_into(pos, &mut Vec::new())
    }

    /// Same as [`Board::reveal`], appending every newly revealed position to `updates`
    /// in the order it was opened.
    pub fn reveal_into(&mut self, pos: Pos, updates: &mut Vec<Pos>) -> Result<bool> {
        let index = self.checked_index(pos)?;
        let field = self.fields[index];

        if field.mine {
            debug!(%pos, "Revealed a mine");
            return Ok(true);
        }
        if field.revealed {
            return Ok(false);
        }

        let before = updates.len();
        self.open(index);
        updates.push(pos);
        if field.adjacent == 0 {
            self.cascade(pos, updates);
        }

        debug!(%pos, opened = updates.len() - before, "Revealed fields");
        Ok(false)
    }

    // Depth-first over zero fields. A frame is a zero field plus the index of the
    // next CASCADE direction to try.
    fn cascade(&mut self, start: Pos, updates: &mut Vec<Pos>) {
        let mut stack = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (pos, direction) = *frame;
            if direction == CASCADE.len() {
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let Some(next) = pos.offset(CASCADE[direction], self.width, self.height) else {
                continue;
            };
            let index = self.index(next);
            let field = self.fields[index];
            if field.revealed || field.mine {
                continue;
            }

            self.open(index);
            updates.push(next);
            if field.adjacent == 0 {
                stack.push((next, 0));
            }
        }
    }

    fn open(&mut self, index: usize) {
        self.fields[index].revealed = true;
        self.revealed += 1;
    }

    /// Reveals every field for the final display. The revealed counter is left as is.
    pub fn open_all(&mut self) {
        for field in &mut self.fields {
            field.revealed = true;
        }
    }

    pub fn is_won(&self) -> bool {
        self.revealed == self.fields.len() - self.mines
    }

    pub fn set_marker(&mut self, pos: Pos, marker: Marker) -> Result<()> {
        let index = self.checked_index(pos)?;
        self.fields[index].marker = marker;
        Ok(())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn checked_index(&self, pos: Pos) -> Result<usize> {
        if self.contains(pos) {
            Ok(self.index(pos))
        } else {
            Err(GameError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, pos: Pos) -> usize {
        pos.x + pos.y * self.width
    }

    fn pos_of(&self, index: usize) -> Pos {
        Pos {
            x: index % self.width,
            y: index / self.width,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.fields.chunks(self.width) {
            for field in row {
                let symbol = if field.revealed {
                    field.symbol()
                } else {
                    HIDDEN_SYMBOL
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
