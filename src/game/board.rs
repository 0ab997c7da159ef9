use std::fmt;

use crate::error::BoardError;

use super::{Coord, Move, Side};

/// Width and height of the square board.
pub const SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// Side owning the piece on this cell, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Side::A),
            Cell::B => Some(Side::B),
        }
    }

    pub fn symbol(self) -> char {
        self.side().map_or(' ', Side::symbol)
    }
}

/// The 7x7 grid. Mutated in place by [`Board::apply`] / [`Board::undo`] pairs;
/// search backtracks through these rather than cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Bounds-checked read of the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Bounds-checked write, used when placing pieces
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Read a coordinate already known to be on the board.
    pub(crate) fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    pub(crate) fn put(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.at(coord) == Cell::Empty
    }

    /// Move the piece at the source onto the destination.
    ///
    /// The move is not re-validated; callers pass moves that came from
    /// move generation or were checked with [`Move::is_legal_on`].
    pub fn apply(&mut self, mv: &Move) {
        let piece = self.at(mv.from);
        self.cells[mv.to.row][mv.to.col] = piece;
        self.cells[mv.from.row][mv.from.col] = Cell::Empty;
    }

    /// Exact inverse of [`Board::apply`] for the same move.
    pub fn undo(&mut self, mv: &Move) {
        let piece = self.at(mv.to);
        self.cells[mv.from.row][mv.from.col] = piece;
        self.cells[mv.to.row][mv.to.col] = Cell::Empty;
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Coordinates of every piece belonging to `side`, row-major
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        let cell = side.to_cell();
        Coord::all().filter(move |&c| self.at(c) == cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=SIZE {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", (b'a' + row as u8) as char)?;
            for cell in cells {
                write!(f, "{}|", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
