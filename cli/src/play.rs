use std::{
    error::Error,
    io::{stdin, stdout, Write},
};

use log::info;
use tictactoe::{minimax, Action, Board, GameResult, Player, SIZE};

pub fn play(human: Player) -> Result<(), Box<dyn Error>> {
    let mut board = Board::initial_state();
    info!("new game, human plays {human}");

    while !board.terminal() {
        print!("{}", render(&board));
        if board.player() == human {
            let Some(input) = get_input()? else {
                println!();
                info!("input closed, abandoning game at {board}");
                return Ok(());
            };
            match try_play_move(&board, &input) {
                Ok(next) => board = next,
                Err(err) => println!("{err}"),
            }
        } else {
            let Some(action) = minimax(&board) else {
                break;
            };
            println!("engine plays {action}");
            board = board.result(action)?;
        }
    }

    print!("{}", render(&board));
    match board.outcome() {
        GameResult::Winner(player) if player == human => println!("You win!"),
        GameResult::Winner(player) => println!("{player} wins."),
        _ => println!("Draw."),
    }
    info!("game over at {board}: {:?}", board.outcome());
    Ok(())
}

fn try_play_move(board: &Board, input: &str) -> Result<Board, Box<dyn Error>> {
    let action: Action = input.parse()?;
    Ok(board.result(action)?)
}

/// Reads one line, or `None` once stdin is closed.
fn get_input() -> Result<Option<String>, Box<dyn Error>> {
    print!("your move (row,col): ");
    stdout().flush()?;
    let mut line = String::new();
    if stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn render(board: &Board) -> String {
    let mut out = String::from("   0 1 2\n");
    for (i, row) in board.rows().enumerate() {
        out.push_str(&format!("{i}  "));
        for (j, cell) in row.iter().enumerate() {
            out.push(match cell {
                Some(Player::X) => 'X',
                Some(Player::O) => 'O',
                None => '.',
            });
            out.push(if j + 1 < SIZE { ' ' } else { '\n' });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render, try_play_move};
    use tictactoe::{Action, Board, Player};

    #[test]
    fn render_grid() {
        let board: Board = "X--/-O-/--X".parse().unwrap();
        assert_eq!(render(&board), "   0 1 2\n0  X . .\n1  . O .\n2  . . X\n");
    }

    #[test]
    fn human_moves() {
        let board = Board::initial_state();
        let next = try_play_move(&board, "1,1\n").unwrap();
        assert_eq!(next[Action::new(1, 1).unwrap()], Some(Player::X));
        assert!(try_play_move(&next, "1 1").is_err());
        assert!(try_play_move(&next, "nonsense").is_err());
        assert!(try_play_move(&next, "3,3").is_err());
    }
}
