use std::fmt::Display;

use log::{debug, info};
use rand::{prelude::SliceRandom, rngs::StdRng, Rng, SeedableRng};
use tictactoe::{minimax, Board, GameResult, PlayError, Player};

pub fn pit(rounds: u32, seed: Option<u64>) -> Result<PitResult, PlayError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut result = PitResult::default();
    for i in 0..rounds {
        info!("pit round {i}/{rounds}");
        for engine in [Player::X, Player::O] {
            let outcome = play_random(engine, &mut rng)?;
            debug!("engine as {engine}: {outcome:?}");
            result.update(outcome, engine);
        }
    }
    Ok(result)
}

fn play_random(engine: Player, rng: &mut impl Rng) -> Result<GameResult, PlayError> {
    let mut board = Board::initial_state();
    while !board.terminal() {
        let action = if board.player() == engine {
            minimax(&board)
        } else {
            board.actions().choose(rng).copied()
        };
        let Some(action) = action else {
            break;
        };
        board = board.result(action)?;
    }
    Ok(board.outcome())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PitResult {
    wins: u32,
    draws: u32,
    losses: u32,
}

impl PitResult {
    fn update(&mut self, result: GameResult, engine: Player) {
        match result {
            GameResult::Winner(winner) => {
                if winner == engine {
                    self.wins += 1
                } else {
                    self.losses += 1
                }
            }
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing => {}
        }
    }
}

impl Display for PitResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "engine wins: {}, draws: {}, losses: {}",
            self.wins, self.draws, self.losses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{pit, PitResult};
    use tictactoe::{GameResult, Player};

    #[test]
    fn engine_never_loses_to_random() {
        let result = pit(2, Some(7)).unwrap();
        assert_eq!(result.losses, 0);
        assert_eq!(result.wins + result.draws, 4);
    }

    #[test]
    fn seeded_pits_repeat() {
        assert_eq!(pit(1, Some(42)).unwrap(), pit(1, Some(42)).unwrap());
    }

    #[test]
    fn tally() {
        let mut result = PitResult::default();
        result.update(GameResult::Winner(Player::O), Player::O);
        result.update(GameResult::Winner(Player::X), Player::O);
        result.update(GameResult::Draw, Player::X);
        assert_eq!(result, PitResult {
            wins: 1,
            draws: 1,
            losses: 1
        });
    }
}
