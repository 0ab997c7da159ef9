//! Initial piece placement: random or from explicit coordinates.

use rand::Rng;

use crate::error::PlacementError;

use super::{Board, Cell, Coord, Side};

/// Most pieces a side may start with. Two full sides still leave one empty cell.
pub const MAX_PIECES: usize = 24;

fn check_piece_count(pieces: usize) -> Result<(), PlacementError> {
    if pieces > MAX_PIECES {
        return Err(PlacementError::TooManyPieces {
            pieces,
            max: MAX_PIECES,
        });
    }
    Ok(())
}

/// Put `pieces` pieces of `side` on uniformly random empty cells.
pub fn place_random<R: Rng>(
    board: &mut Board,
    side: Side,
    pieces: usize,
    rng: &mut R,
) -> Result<(), PlacementError> {
    check_piece_count(pieces)?;
    let mut free: Vec<Coord> = Coord::all().filter(|&c| board.at(c) == Cell::Empty).collect();
    if free.len() < pieces {
        return Err(PlacementError::TooManyPieces {
            pieces,
            max: free.len(),
        });
    }

    for _ in 0..pieces {
        let idx = rng.random_range(0..free.len());
        let coord = free.swap_remove(idx);
        board.put(coord, side.to_cell());
    }
    Ok(())
}

/// Build a board with `pieces` random pieces for each side.
pub fn random_board<R: Rng>(pieces: usize, rng: &mut R) -> Result<Board, PlacementError> {
    let mut board = Board::new();
    place_random(&mut board, Side::A, pieces, rng)?;
    place_random(&mut board, Side::B, pieces, rng)?;
    Ok(board)
}

/// Place one piece of `side` at `coord`, refusing occupied cells.
pub fn place_at(board: &mut Board, side: Side, coord: Coord) -> Result<(), PlacementError> {
    if board.get(coord.row, coord.col)? != Cell::Empty {
        return Err(PlacementError::Occupied(coord));
    }
    board.put(coord, side.to_cell());
    Ok(())
}

/// Build a board from explicit coordinate lists, one per side.
pub fn board_from_coords(side_a: &[Coord], side_b: &[Coord]) -> Result<Board, PlacementError> {
    check_piece_count(side_a.len())?;
    check_piece_count(side_b.len())?;
    let mut board = Board::new();
    for &coord in side_a {
        place_at(&mut board, Side::A, coord)?;
    }
    for &coord in side_b {
        place_at(&mut board, Side::B, coord)?;
    }
    Ok(board)
}

/// Check that both sides have exactly `pieces` pieces.
pub fn validate_counts(board: &Board, pieces: usize) -> Result<(), PlacementError> {
    for side in [Side::A, Side::B] {
        let found = board.count(side.to_cell());
        if found != pieces {
            return Err(PlacementError::WrongCount {
                side,
                expected: pieces,
                found,
            });
        }
    }
    Ok(())
}
