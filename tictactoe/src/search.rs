//! Exhaustive minimax over the full game tree.
//!
//! Every call searches down to terminal positions. There is no pruning and no
//! caching; the whole tree from the empty board has fewer than 550 000 nodes.
//! Among equally good actions the first in row-major order is chosen.

use std::time::Instant;

use log::debug;

use crate::{Action, Board, Player};

/// Value of a position from X's perspective together with the action that
/// achieves it. The action is `None` on terminal boards.
pub type Evaluation = (i8, Option<Action>);

fn child(board: &Board, action: Action) -> Board {
    // Actions come from `Board::actions`, so the cell is always empty.
    board.with(action, board.player())
}

/// Best outcome X can force when X is to move.
pub fn max_value(board: &Board) -> Evaluation {
    if board.terminal() {
        return (board.utility(), None);
    }
    let mut best = (i8::MIN, None);
    for action in board.actions() {
        let (value, _) = min_value(&child(board, action));
        if value > best.0 {
            best = (value, Some(action));
        }
    }
    best
}

/// Best outcome O can force when O is to move.
pub fn min_value(board: &Board) -> Evaluation {
    if board.terminal() {
        return (board.utility(), None);
    }
    let mut best = (i8::MAX, None);
    for action in board.actions() {
        let (value, _) = max_value(&child(board, action));
        if value < best.0 {
            best = (value, Some(action));
        }
    }
    best
}

fn search(board: &Board) -> Evaluation {
    match board.player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// The optimal action for the side to move, or `None` if the game is over.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.terminal() {
        return None;
    }
    let start = Instant::now();
    let (value, action) = search(board);
    if let Some(action) = action {
        debug!(
            "{} to move on {board}: {action} scores {value} ({:?})",
            board.player(),
            start.elapsed()
        );
    }
    action
}

/// Game-theoretic value of the position under perfect play, from X's
/// perspective. Terminal boards score their utility.
pub fn evaluate(board: &Board) -> i8 {
    search(board).0
}
