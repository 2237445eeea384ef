use crate::{ai, board::Board, common::Coord};
use alloc::collections::BTreeSet;
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player that fires at random cells without ever repeating one.
#[derive(Debug, Default)]
pub struct AiPlayer {
    history: BTreeSet<Coord>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates chosen so far in the current game.
    pub fn history(&self) -> &BTreeSet<Coord> {
        &self.history
    }
}

impl Player for AiPlayer {
    fn new_game(&mut self, _size: usize, _ships: usize) {
        self.history.clear();
    }

    fn select_target(&mut self, rng: &mut SmallRng, _own: &Board, target: &Board) -> Option<Coord> {
        ai::next_shot(target.size(), &mut self.history, rng)
    }
}
