use crate::{
    board::Board,
    common::{Coord, GameError},
    game::ShotReport,
};
use rand::rngs::SmallRng;

/// Interface implemented by the sides of a game.
///
/// A player picks targets and receives feedback; the engine owns both boards
/// and decides whether a target is acceptable.
pub trait Player {
    /// Reset per-game state before a new game on a `size × size` board with
    /// `ships` ships per side.
    fn new_game(&mut self, _size: usize, _ships: usize) {}

    /// Choose the next target on `target`. `own` is the player's own board.
    /// Returning `None` abandons the game.
    fn select_target(&mut self, rng: &mut SmallRng, own: &Board, target: &Board) -> Option<Coord>;

    /// The engine refused the last target; another one will be requested.
    fn handle_rejected(&mut self, _coord: Coord, _err: &GameError) {}

    /// Inform the player of the result of its own shot.
    fn handle_shot_result(&mut self, _report: &ShotReport) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _report: &ShotReport) {}
}
