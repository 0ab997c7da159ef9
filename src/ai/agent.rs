use crate::error::PlayError;
use crate::game::{Board, Move, Side};

/// Universal interface for anything that picks moves: the search, a random
/// mover, or a person at the console.
pub trait Agent {
    /// Choose a legal move for `side`.
    ///
    /// `board` may be mutated while thinking but must be returned unchanged.
    /// `remaining_rounds` counts rounds left before the turn limit, including
    /// the current one.
    fn select_move(
        &mut self,
        board: &mut Board,
        side: Side,
        remaining_rounds: usize,
    ) -> Result<Move, PlayError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
