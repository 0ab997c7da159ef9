//! Core game model: the 7x7 board, sides, coordinates, move generation,
//! initial placement and the turn-by-turn session state machine.

mod board;
mod coord;
mod moves;
pub mod placement;
mod side;
mod state;

pub use board::{Board, Cell, SIZE};
pub use coord::Coord;
pub use moves::{generate, has_legal_move, Move, MoveSet};
pub use side::Side;
pub use state::{EndReason, GameOutcome, GameSession, TurnState};
