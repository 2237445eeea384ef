//! Multi-round sessions and their running score.

use crate::{
    common::{GameError, Side},
    config::GameConfig,
    game::GameEngine,
    player::Player,
};
use log::info;
use rand::rngs::SmallRng;

/// Wins per side across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    wins: [u32; 2],
    /// Set when a round was left unfinished.
    pub abandoned: bool,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: Side) {
        self.wins[winner.index()] += 1;
    }

    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side.index()]
    }

    /// Completed rounds.
    pub fn rounds(&self) -> u32 {
        self.wins[0] + self.wins[1]
    }

    /// Side with more wins, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.wins[0].cmp(&self.wins[1]) {
            core::cmp::Ordering::Greater => Some(Side::Player),
            core::cmp::Ordering::Less => Some(Side::Opponent),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Play `config.rounds` games with fresh boards each round.
///
/// `on_round` sees the round number (from 1) and the finished engine. The
/// score is threaded through the loop and returned; a game abandoned by a
/// player ends the session early with `abandoned` set.
pub fn play_session<F>(
    config: &GameConfig,
    players: [&mut dyn Player; 2],
    rng: &mut SmallRng,
    mut on_round: F,
) -> Result<Scoreboard, GameError>
where
    F: FnMut(u32, &GameEngine),
{
    let [first, second] = players;
    let mut score = Scoreboard::new();
    for round in 1..=config.rounds {
        let mut engine = GameEngine::new(config, rng)?;
        match engine.play([&mut *first, &mut *second], rng) {
            Some(winner) => {
                score.record(winner);
                info!("round {} won by {}", round, winner);
                on_round(round, &engine);
            }
            None => {
                score.abandoned = true;
                break;
            }
        }
    }
    Ok(score)
}
