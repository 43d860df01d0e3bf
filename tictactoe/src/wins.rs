use crate::{
    board::{Board, SIZE},
    Action,
    GameResult,
    Player,
};

impl Board {
    fn owns(&self, player: Player, line: impl IntoIterator<Item = (usize, usize)>) -> bool {
        line.into_iter()
            .filter_map(|(row, col)| Action::new(row, col))
            .all(|action| self[action] == Some(player))
    }

    fn any_row(&self, player: Player) -> bool {
        (0..SIZE).any(|row| self.owns(player, (0..SIZE).map(|col| (row, col))))
    }

    fn any_column(&self, player: Player) -> bool {
        (0..SIZE).any(|col| self.owns(player, (0..SIZE).map(|row| (row, col))))
    }

    fn main_diagonal(&self, player: Player) -> bool {
        self.owns(player, (0..SIZE).map(|i| (i, i)))
    }

    fn anti_diagonal(&self, player: Player) -> bool {
        self.owns(player, (0..SIZE).map(|i| (i, SIZE - 1 - i)))
    }

    /// The player with three in a line, if any.
    ///
    /// Lines are checked rows, then columns, then the two diagonals, looking for
    /// X before O within each group. Only malformed boards can have two winners,
    /// in which case the first line found decides.
    pub fn winner(&self) -> Option<Player> {
        let checks: [(fn(&Board, Player) -> bool, Player); 8] = [
            (Board::any_row, Player::X),
            (Board::any_row, Player::O),
            (Board::any_column, Player::X),
            (Board::any_column, Player::O),
            (Board::main_diagonal, Player::X),
            (Board::main_diagonal, Player::O),
            (Board::anti_diagonal, Player::X),
            (Board::anti_diagonal, Player::O),
        ];
        checks
            .into_iter()
            .find(|(check, player)| check(self, *player))
            .map(|(_, player)| player)
    }

    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.full()
    }

    /// Score from X's point of view: 1 if X won, -1 if O won, 0 otherwise.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> GameResult {
        if let Some(player) = self.winner() {
            GameResult::Winner(player)
        } else if self.full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }
}
