use arrayvec::ArrayVec;

use crate::{
    board::{Board, CELLS},
    Action,
};

impl Board {
    /// Every empty cell, in row-major order.
    pub fn actions(&self) -> ArrayVec<Action, CELLS> {
        (0..CELLS)
            .map(Action::from_index)
            .filter(|&action| self[action].is_none())
            .collect()
    }
}

/// Number of move sequences of length `depth`, where games that end early
/// count once.
pub fn perf_count(board: Board, depth: usize) -> usize {
    if depth == 0 || board.terminal() {
        1
    } else if depth == 1 {
        board.actions().len()
    } else {
        board
            .actions()
            .into_iter()
            .map(|action| perf_count(board.with(action, board.player()), depth - 1))
            .sum()
    }
}
