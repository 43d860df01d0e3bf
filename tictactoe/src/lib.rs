mod action;
mod board;
mod error;
mod game_result;
mod move_gen;
mod notation;
mod play;
mod player;
pub mod search;
mod wins;

pub use action::Action;
pub use arrayvec;
pub use board::{Board, Cell, CELLS, SIZE};
pub use error::*;
pub use game_result::GameResult;
pub use move_gen::perf_count;
pub use player::Player;
pub use search::minimax;
