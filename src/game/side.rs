use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// One of the two players.
///
/// `A` is Player1: it moves first and is the maximizing side of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::A => Cell::A,
            Side::B => Cell::B,
        }
    }

    /// Side A scores are positive, so it is the maximizer.
    pub fn is_maximizing(self) -> bool {
        self == Side::A
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "Player1",
            Side::B => "Player2",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::A => 'x',
            Side::B => 'o',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
