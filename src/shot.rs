//! Shot resolution against a single board.

use crate::board::Board;
use crate::common::{Cell, Coord, ShotOutcome};

/// Fire at `coord`, moving `Ship` to `Hit` or `Water` to `Miss`.
///
/// Total over every input: a cell that was already resolved, or a coordinate
/// off the board, reports a miss and leaves the board unchanged. Callers that
/// must reject repeat shots check freshness before calling.
pub fn fire(board: &mut Board, coord: Coord) -> ShotOutcome {
    let next = match board.cell(coord) {
        Ok(Cell::Ship) => Cell::Hit,
        Ok(Cell::Water) => Cell::Miss,
        Ok(Cell::Hit) | Ok(Cell::Miss) | Err(_) => return ShotOutcome::Miss,
    };
    match board.set(coord, next) {
        Ok(()) if next == Cell::Hit => ShotOutcome::Hit,
        _ => ShotOutcome::Miss,
    }
}
