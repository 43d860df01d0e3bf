//! Compact text form of a board: rows top to bottom separated by `/`,
//! each cell one of `X`, `O` or `-`. The empty board is `---/---/---`.

use std::{fmt::Display, str::FromStr};

use crate::{
    board::{Cell, SIZE},
    Board,
    ParseError,
    Player,
};

fn parse_cell(c: char) -> Result<Cell, ParseError> {
    match c {
        'X' | 'x' => Ok(Some(Player::X)),
        'O' | 'o' => Ok(Some(Player::O)),
        '-' | '.' => Ok(None),
        other => Err(ParseError::UnknownCell(other)),
    }
}

fn parse_row(row: &str) -> Result<[Cell; SIZE], ParseError> {
    let cells = row.chars().map(parse_cell).collect::<Result<Vec<_>, _>>()?;
    cells.try_into().map_err(|_| ParseError::BadLength)
}

impl FromStr for Board {
    type Err = ParseError;

    /// Counts are not checked, so unreachable positions parse fine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim()
            .split('/')
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()?;
        let rows: [[Cell; SIZE]; SIZE] = rows.try_into().map_err(|_| ParseError::BadRowCount)?;
        Ok(Board::from_rows(rows))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('-', Player::symbol))?;
            }
        }
        Ok(())
    }
}
