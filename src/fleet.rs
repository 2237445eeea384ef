//! Fleet placement: single-cell ships dropped onto a board at random or by
//! hand.

use crate::board::Board;
use crate::common::{Cell, ConfigError, Coord, GameError};
use crate::config::{check_ship_count, ship_capacity, MAX_SAMPLE_ATTEMPTS};
use log::debug;
use rand::Rng;

/// Convert `count` distinct water cells, chosen uniformly at random, into
/// ships.
///
/// Fails with `InvalidConfig` if `count` is zero or the resulting fleet would
/// exceed the board's capacity; the board is left untouched in that case.
pub fn place_ships<R: Rng + ?Sized>(
    board: &mut Board,
    count: usize,
    rng: &mut R,
) -> Result<(), GameError> {
    let size = board.size();
    let existing = board.count(Cell::Ship) + board.count(Cell::Hit);
    check_ship_count(size, count)?;
    check_ship_count(size, existing + count)?;
    if board.count(Cell::Water) < count {
        return Err(ConfigError::ShipCount {
            count,
            max: board.count(Cell::Water),
        }
        .into());
    }
    for _ in 0..count {
        let coord = Coord::random_where(size, MAX_SAMPLE_ATTEMPTS, rng, |c| {
            board.cell(c) == Ok(Cell::Water)
        })
        .ok_or(ConfigError::ShipCount {
            count,
            max: ship_capacity(size),
        })?;
        board.set(coord, Cell::Ship)?;
    }
    debug!("placed {} ships on a {}x{} board", count, size, size);
    Ok(())
}

/// Put a single ship at `coord`.
pub fn place_ship_at(board: &mut Board, coord: Coord) -> Result<(), GameError> {
    match board.cell(coord)? {
        Cell::Water => board.set(coord, Cell::Ship),
        _ => Err(GameError::ShipOverlaps(coord)),
    }
}
