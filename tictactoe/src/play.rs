use crate::{Action, Board, PlayError};

impl Board {
    /// The board after the side to move marks `action`.
    ///
    /// `self` is left as it was. Fails if the cell is already taken.
    pub fn result(&self, action: Action) -> Result<Board, PlayError> {
        if self[action].is_some() {
            return Err(PlayError::InvalidMove(action));
        }
        Ok(self.with(action, self.player()))
    }
}
