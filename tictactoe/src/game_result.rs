use crate::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Winner(Player),
    Draw,
    Ongoing,
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Ongoing
    }
}
