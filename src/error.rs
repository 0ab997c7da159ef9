use std::path::PathBuf;

use crate::game::{Coord, Side};

/// Errors from direct cell access on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the 7x7 board")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors when decoding a coordinate such as `c4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("coordinate must be a row letter and a column digit, got {0:?}")]
    Length(String),

    #[error("row must be a letter from 'a' to 'g', got {0:?}")]
    Row(char),

    #[error("column must be a digit from '1' to '7', got {0:?}")]
    Column(char),
}

/// Errors raised while putting the initial pieces on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("{pieces} pieces per side do not fit on the board (max {max})")]
    TooManyPieces { pieces: usize, max: usize },

    #[error("{side} has {found} pieces on the board, expected {expected}")]
    WrongCount {
        side: Side,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by the collaborators that drive a game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),

    #[error("input ended before the game finished")]
    InputClosed,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("placement error: {0}")]
    Placement(#[from] PlacementError),
}
