use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves by `(dx, dy)`, returning a value only when it stays inside `width` x `height`.
    pub fn offset(self, (dx, dy): (isize, isize), width: usize, height: usize) -> Option<Pos> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Pos { x, y })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How mines are scattered over a fresh board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Exactly the requested number of mines, uniformly distributed.
    #[default]
    Exact,
    /// One random draw per requested mine. Draws landing on a mine are lost,
    /// so dense boards end up with fewer mines than requested.
    WithReplacement,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown placement `{0}`, expected `exact` or `with-replacement`")]
pub struct UnknownPlacement(pub String);

impl FromStr for Placement {
    type Err = UnknownPlacement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "with-replacement" => Ok(Self::WithReplacement),
            other => Err(UnknownPlacement(other.to_string())),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::WithReplacement => "with-replacement",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameParams {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    pub placement: Placement,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            width: 40,
            height: 15,
            mines: 10,
            placement: Placement::Exact,
        }
    }
}
