/// Symbol shown for a revealed mine.
pub const MINE_SYMBOL: char = 'b';
/// Symbol shown for any field that is not revealed yet.
pub const HIDDEN_SYMBOL: char = '#';

/// Player marker on a field. Stored only: revealing, winning and rendering ignore it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    #[default]
    None,
    Flagged,
    Questioned,
}

/// A single cell of the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) adjacent: u8,
    pub(crate) marker: Marker,
}

impl Field {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of mines among the up to 8 surrounding fields.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent
    }

    pub const fn marker(&self) -> Marker {
        self.marker
    }

    /// Character for this field once revealed.
    pub fn symbol(&self) -> char {
        if self.mine {
            return MINE_SYMBOL;
        }

        match self.adjacent {
            count @ 0..=8 => char::from(b'0' + count),
            _ => '?',
        }
    }
}
