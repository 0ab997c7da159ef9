use crate::game::{Board, Cell, Side, SIZE};

/// Position score. Positive favours side A.
pub type Score = i32;

/// Trait for scoring a board position from side A's point of view.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> Score;
}

/// Mobility differential: cells A can step into minus cells B can step into.
pub struct MobilityHeuristic;

impl Heuristic for MobilityHeuristic {
    fn evaluate(&self, board: &Board) -> Score {
        static_eval(board)
    }
}

/// Number of distinct empty cells `side` can move a piece into.
///
/// An empty cell next to two of the side's pieces counts once.
pub fn mobility(board: &Board, side: Side) -> usize {
    let mut reachable = [[false; SIZE]; SIZE];
    for piece in board.pieces(side) {
        for target in piece.neighbors() {
            if board.at(target) == Cell::Empty {
                reachable[target.row][target.col] = true;
            }
        }
    }
    reachable.iter().flatten().filter(|&&r| r).count()
}

pub fn static_eval(board: &Board) -> Score {
    mobility(board, Side::A) as Score - mobility(board, Side::B) as Score
}
