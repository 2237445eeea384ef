// Non-repeating random targeting for the computer side.
// Keeps no memory of outcomes; it only avoids coordinates it already chose.

use crate::common::Coord;
use crate::config::MAX_SAMPLE_ATTEMPTS;
use alloc::collections::BTreeSet;
use rand::Rng;

/// Choose a uniformly random coordinate on a `size × size` board that is not
/// in `history`, record it there and return it.
///
/// Returns `None` once every coordinate has been chosen.
pub fn next_shot<R: Rng + ?Sized>(
    size: usize,
    history: &mut BTreeSet<Coord>,
    rng: &mut R,
) -> Option<Coord> {
    if history.len() >= size * size {
        return None;
    }
    let coord = Coord::random_where(size, MAX_SAMPLE_ATTEMPTS, rng, |c| !history.contains(&c))?;
    history.insert(coord);
    Some(coord)
}
