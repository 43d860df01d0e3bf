use tictactoe::{search::evaluate, *};

/// Plays every reply for `opponent` while the engine plays the other side,
/// and returns the worst result the engine reached.
fn worst_case(board: Board, opponent: Player) -> Result<GameResult, PlayError> {
    match board.outcome() {
        GameResult::Ongoing => {}
        done => return Ok(done),
    }

    if board.player() == opponent {
        let mut worst = GameResult::Ongoing;
        for action in board.actions() {
            let result = worst_case(board.result(action)?, opponent)?;
            if result == GameResult::Winner(opponent) {
                return Ok(result);
            }
            if result == GameResult::Draw {
                worst = result;
            } else if worst == GameResult::Ongoing {
                worst = result;
            }
        }
        Ok(worst)
    } else {
        let action = minimax(&board).expect("ongoing games have a move");
        worst_case(board.result(action)?, opponent)
    }
}

#[test]
fn opening_is_corner_or_center() {
    let corners_and_center = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)];
    let action = minimax(&Board::initial_state()).expect("empty board has moves");
    assert!(corners_and_center.contains(&(action.row(), action.col())), "opened with {action}");
}

#[test]
fn x_never_loses() -> Result<(), PlayError> {
    let worst = worst_case(Board::initial_state(), Player::O)?;
    assert_ne!(worst, GameResult::Winner(Player::O));
    Ok(())
}

#[test]
fn o_never_loses() -> Result<(), PlayError> {
    let worst = worst_case(Board::initial_state(), Player::X)?;
    assert_ne!(worst, GameResult::Winner(Player::X));
    Ok(())
}

#[test]
fn perfect_play_draws() -> Result<(), PlayError> {
    let mut board = Board::initial_state();
    let mut plies = 0;
    while let Some(action) = minimax(&board) {
        board = board.result(action)?;
        plies += 1;
    }
    assert_eq!(plies, 9);
    assert!(board.terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), 0);
    Ok(())
}

#[test]
fn punishes_a_blunder() -> Result<(), Box<dyn std::error::Error>> {
    // O answered a corner with an edge, which loses.
    let board: Board = "XO-/---/---".parse()?;
    assert_eq!(evaluate(&board), 1);

    let mut board = board;
    while let Some(action) = minimax(&board) {
        board = board.result(action)?;
    }
    assert_eq!(board.winner(), Some(Player::X));
    Ok(())
}

#[test]
fn every_engine_move_is_legal() -> Result<(), ParseError> {
    for notation in ["X--/---/---", "X--/-O-/--X", "XO-/-X-/---", "OX-/-X-/--O"] {
        let board: Board = notation.parse()?;
        if let Some(action) = minimax(&board) {
            assert!(board.actions().contains(&action));
            assert!(board.result(action).is_ok());
        }
    }
    Ok(())
}
