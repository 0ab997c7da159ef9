use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PlayError;
use crate::game::{generate, Board, Move, Side};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(
        &mut self,
        board: &mut Board,
        side: Side,
        _remaining_rounds: usize,
    ) -> Result<Move, PlayError> {
        let moves = generate(board, side);
        if moves.is_empty() {
            return Err(PlayError::NoLegalMoves(side));
        }
        let idx = self.rng.random_range(0..moves.len());
        moves
            .into_iter()
            .nth(idx)
            .ok_or(PlayError::NoLegalMoves(side))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
