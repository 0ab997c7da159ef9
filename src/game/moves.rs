use std::fmt;

use super::{Board, Cell, Coord, Side};

/// A one-step orthogonal relocation of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    /// Whether `side` may play this move on `board`: its own piece moving one
    /// step up, down, left or right into an empty cell.
    pub fn is_legal_on(&self, board: &Board, side: Side) -> bool {
        self.from.in_bounds()
            && board.at(self.from) == side.to_cell()
            && self.from.is_adjacent(self.to)
            && board.is_empty_at(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// The legal moves of one side in one position.
///
/// Owned by whoever asked for it and dropped with that frame; it holds no
/// reference to the board it was generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Enumerate every legal move for `side`.
///
/// Pieces are scanned row-major and each piece's targets in the order up,
/// down, left, right. Callers must not rely on that order for anything but
/// tie-breaking.
pub fn generate(board: &Board, side: Side) -> MoveSet {
    let moves = board
        .pieces(side)
        .flat_map(move |from| {
            from.neighbors()
                .filter(move |&to| board.at(to) == Cell::Empty)
                .map(move |to| Move::new(from, to))
        })
        .collect();
    MoveSet { moves }
}

/// Whether `side` has at least one legal move, without building the set.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|from| from.neighbors().any(|to| board.at(to) == Cell::Empty))
}
