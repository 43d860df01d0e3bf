use std::{fmt::Display, str::FromStr};

use crate::{error::ParseError, board::SIZE};

/// A cell coordinate on the board. Always in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    row: u8,
    col: u8,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Action {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Index into the row-major cell array.
    pub(crate) const fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Action {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = ParseError;

    /// Accepts `row,col` or `row col`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::BadCoordinate);
        };
        let row = row.parse().map_err(|_| ParseError::BadCoordinate)?;
        let col = col.parse().map_err(|_| ParseError::BadCoordinate)?;
        Action::new(row, col).ok_or(ParseError::OutOfBounds)
    }
}
