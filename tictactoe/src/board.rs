use std::ops::Index;

use crate::{Action, Player};

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

/// Contents of a single square.
pub type Cell = Option<Player>;

/// An immutable snapshot of the 3x3 grid, stored row-major.
///
/// The side to move is never stored. It is derived from the mark counts so that
/// two boards with the same marks are the same position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Index<Action> for Board {
    type Output = Cell;

    fn index(&self, index: Action) -> &Self::Output {
        &self.cells[index.index()]
    }
}

impl Board {
    /// The empty board X starts from.
    pub const fn initial_state() -> Self {
        Board { cells: [None; CELLS] }
    }

    /// Build a board from rows listed top to bottom.
    pub const fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = rows;
        Board {
            cells: [a, b, c, d, e, f, g, h, i],
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(SIZE)
    }

    pub fn get(&self, action: Action) -> Cell {
        self[action]
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }

    pub fn full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The side to move.
    ///
    /// On a terminal board the answer is meaningless and callers should not
    /// rely on it.
    pub fn player(&self) -> Player {
        if *self == Board::initial_state() {
            return Player::X;
        }
        if self.count(Player::X) <= self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Copy of this board with `player` written into the cell.
    pub(crate) fn with(mut self, action: Action, player: Player) -> Self {
        self.cells[action.index()] = Some(player);
        self
    }
}
