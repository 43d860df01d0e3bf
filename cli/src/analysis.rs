use std::error::Error;

use log::info;
use tictactoe::{minimax, search::evaluate, Board};

use crate::play::render;

pub fn best(notation: &str) -> Result<(), Box<dyn Error>> {
    let board: Board = notation.parse()?;
    print!("{}", render(&board));
    match minimax(&board) {
        Some(action) => {
            println!("{} to move, best move {action}", board.player());
            println!("evaluation {:+} (from X's side)", evaluate(&board));
        }
        None => println!("game over: {:?}", board.outcome()),
    }
    Ok(())
}

pub fn self_play() -> Result<(), Box<dyn Error>> {
    let mut board = Board::initial_state();
    while let Some(action) = minimax(&board) {
        let player = board.player();
        board = board.result(action)?;
        println!("{player} plays {action}");
        info!("position {board}");
    }
    print!("{}", render(&board));
    println!("{:?}", board.outcome());
    Ok(())
}
