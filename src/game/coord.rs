use std::fmt;
use std::str::FromStr;

use crate::error::CoordError;

use super::board::SIZE;

/// A cell position, row-major and 0-based.
///
/// Text form is a row letter `a..g` followed by a column digit `1..7`,
/// so `Coord::new(2, 3)` reads as `c4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// In-bounds orthogonal neighbours, in the order up, down, left, right.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < SIZE).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < SIZE).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Manhattan distance of exactly one.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'a' + self.row as u8) as char;
        write!(f, "{}{}", row, self.col + 1)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (row, col) = match (chars.next(), chars.next(), chars.next()) {
            (Some(row), Some(col), None) => (row, col),
            _ => return Err(CoordError::Length(s.to_string())),
        };

        let row_idx = match row {
            'a'..='g' => row as usize - 'a' as usize,
            _ => return Err(CoordError::Row(row)),
        };
        let col_idx = match col {
            '1'..='7' => col as usize - '1' as usize,
            _ => return Err(CoordError::Column(col)),
        };

        Ok(Coord::new(row_idx, col_idx))
    }
}
