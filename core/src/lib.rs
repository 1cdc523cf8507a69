pub mod action;
pub mod board;
pub mod error;
pub mod field;
pub mod game;
pub mod models;

pub use action::{Action, ActionKind, ActionParseError};
pub use board::Board;
pub use error::{GameError, Result};
pub use field::{Field, HIDDEN_SYMBOL, MINE_SYMBOL, Marker};
pub use game::{Game, GameStatus};
pub use models::{GameParams, Placement, Pos, UnknownPlacement};
