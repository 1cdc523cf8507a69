use std::str::FromStr;

use thiserror::Error;

use crate::models::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Open,
    Flag,
    Question,
}

/// A player command such as `o 3 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub pos: Pos,
}

impl Action {
    pub const fn open(x: usize, y: usize) -> Self {
        Self {
            kind: ActionKind::Open,
            pos: Pos { x, y },
        }
    }

    pub const fn flag(x: usize, y: usize) -> Self {
        Self {
            kind: ActionKind::Flag,
            pos: Pos { x, y },
        }
    }

    pub const fn question(x: usize, y: usize) -> Self {
        Self {
            kind: ActionKind::Question,
            pos: Pos { x, y },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("expected `<o|f|q> <x> <y>`, got {0} words")]
    WrongWordCount(usize),
    #[error("unknown action `{0}`, expected `o`, `f` or `q`")]
    UnknownKind(String),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoordinate(String),
}

impl FromStr for ActionKind {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o" => Ok(Self::Open),
            "f" => Ok(Self::Flag),
            "q" => Ok(Self::Question),
            other => Err(ActionParseError::UnknownKind(other.to_string())),
        }
    }
}

fn parse_coordinate(word: &str) -> Result<usize, ActionParseError> {
    word.parse()
        .map_err(|_| ActionParseError::InvalidCoordinate(word.to_string()))
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let [kind, x, y] = words.as_slice() else {
            return Err(ActionParseError::WrongWordCount(words.len()));
        };

        Ok(Self {
            kind: kind.parse()?,
            pos: Pos {
                x: parse_coordinate(x)?,
                y: parse_coordinate(y)?,
            },
        })
    }
}
