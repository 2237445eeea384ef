use crate::{
    board::Board,
    common::{ConfigError, Coord, GameError, ShotOutcome, Side},
    config::{ship_capacity, GameConfig, FIRST_TO_MOVE},
    fleet::place_ships,
    player::Player,
    shot::fire,
};
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Waiting for `Side` to fire.
    AwaitingTurn(Side),
    /// Terminal; no further shots are accepted.
    GameOver { winner: Side },
}

/// What happened when a side fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub shooter: Side,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    /// Ships the target side still has afloat after this shot.
    pub ships_left: usize,
    /// Set when this shot ended the game.
    pub winner: Option<Side>,
}

/// Core game logic holding both boards and their remaining-ship counters.
#[derive(Debug, Clone)]
pub struct GameEngine {
    boards: [Board; 2],
    remaining: [usize; 2],
    status: GameStatus,
    turns: usize,
}

impl GameEngine {
    /// Create both boards and place `config.ships` ships on each.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut player = Board::new(config.size)?;
        let mut opponent = Board::new(config.size)?;
        place_ships(&mut player, config.ships, rng)?;
        place_ships(&mut opponent, config.ships, rng)?;
        Self::from_boards(player, opponent)
    }

    /// Start a game from boards that already carry their ships.
    pub fn from_boards(player: Board, opponent: Board) -> Result<Self, GameError> {
        if player.size() != opponent.size() {
            return Err(ConfigError::BoardSize {
                size: opponent.size(),
                min: player.size(),
                max: player.size(),
            }
            .into());
        }
        let remaining = [player.ships_afloat(), opponent.ships_afloat()];
        for count in remaining {
            if count == 0 {
                return Err(ConfigError::ShipCount {
                    count,
                    max: ship_capacity(player.size()),
                }
                .into());
            }
        }
        info!(
            "new {}x{} game, {} vs {} ships",
            player.size(),
            player.size(),
            remaining[0],
            remaining[1]
        );
        Ok(Self {
            boards: [player, opponent],
            remaining,
            status: GameStatus::AwaitingTurn(FIRST_TO_MOVE),
            turns: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side whose turn it is, or `None` after the game ended.
    pub fn to_move(&self) -> Option<Side> {
        match self.status {
            GameStatus::AwaitingTurn(side) => Some(side),
            GameStatus::GameOver { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::GameOver { winner } => Some(winner),
            GameStatus::AwaitingTurn(_) => None,
        }
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Ships `side` still has afloat.
    pub fn remaining(&self, side: Side) -> usize {
        self.remaining[side.index()]
    }

    pub fn size(&self) -> usize {
        self.boards[0].size()
    }

    /// Shots resolved so far, both sides together.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Check that the side to move may fire at `coord`: it must lie on the
    /// board and must not have been fired upon before.
    pub fn check_target(&self, coord: Coord) -> Result<(), GameError> {
        let shooter = self.to_move().ok_or(GameError::GameOver)?;
        let target = self.board(shooter.other());
        if target.is_fresh(coord)? {
            Ok(())
        } else {
            Err(GameError::AlreadyResolved(coord))
        }
    }

    /// Fire the side to move's shot at `coord` and advance the game.
    ///
    /// A rejected coordinate leaves both boards and the turn untouched.
    pub fn take_shot(&mut self, coord: Coord) -> Result<ShotReport, GameError> {
        self.check_target(coord)?;
        let shooter = self.to_move().ok_or(GameError::GameOver)?;
        let defender = shooter.other();

        let outcome = fire(&mut self.boards[defender.index()], coord);
        let left = &mut self.remaining[defender.index()];
        if outcome.is_hit() {
            *left = left.saturating_sub(1);
        }
        let ships_left = *left;
        self.turns += 1;

        let winner = if ships_left == 0 {
            self.status = GameStatus::GameOver { winner: shooter };
            info!("{} wins after {} shots", shooter, self.turns);
            Some(shooter)
        } else {
            self.status = GameStatus::AwaitingTurn(defender);
            None
        };
        debug!("{} fired at {}: {:?}, {} ships left", shooter, coord, outcome, ships_left);

        Ok(ShotReport {
            shooter,
            coord,
            outcome,
            ships_left,
            winner,
        })
    }

    /// Run the turn loop until the game ends.
    ///
    /// `players` is indexed by [`Side::index`]. A rejected target is reported
    /// back to the acting player and a new one requested. Returns the winner,
    /// or `None` if a player abandoned the game.
    pub fn play(&mut self, players: [&mut dyn Player; 2], rng: &mut SmallRng) -> Option<Side> {
        if self.turns == 0 {
            let ships = self.remaining;
            for side in Side::BOTH {
                players[side.index()].new_game(self.size(), ships[side.index()]);
            }
        }

        loop {
            let shooter = match self.status {
                GameStatus::AwaitingTurn(side) => side,
                GameStatus::GameOver { winner } => return Some(winner),
            };
            let report = loop {
                let coord = players[shooter.index()].select_target(
                    rng,
                    self.board(shooter),
                    self.board(shooter.other()),
                )?;
                match self.take_shot(coord) {
                    Ok(report) => break report,
                    Err(err) => {
                        warn!("{} target {} rejected: {}", shooter, coord, err);
                        players[shooter.index()].handle_rejected(coord, &err);
                    }
                }
            };
            players[shooter.index()].handle_shot_result(&report);
            players[shooter.other().index()].handle_opponent_shot(&report);
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::fleet::place_ship_at;
    use log::{Level, LevelFilter, Metadata, Record};
    use rand::SeedableRng;
    use std::string::{String, ToString};
    use std::sync::Mutex;
    use std::vec::Vec;

    static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    struct Capture;

    impl log::Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut lines) = CAPTURED.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    struct Fixed(Vec<Coord>);

    impl Player for Fixed {
        fn select_target(&mut self, _: &mut SmallRng, _: &Board, _: &Board) -> Option<Coord> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    fn one_ship(size: usize, at: Coord) -> Board {
        let mut board = Board::new(size).unwrap();
        place_ship_at(&mut board, at).unwrap();
        board
    }

    #[test]
    fn rejected_target_is_logged_as_warning() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        let mut engine =
            GameEngine::from_boards(one_ship(2, Coord::new(0, 0)), one_ship(2, Coord::new(1, 1))).unwrap();
        let mut human = Fixed(vec![Coord::new(4, 4), Coord::new(1, 1)]);
        let mut computer = Fixed(Vec::new());
        let mut rng = SmallRng::seed_from_u64(3);

        assert_eq!(engine.play([&mut human, &mut computer], &mut rng), Some(Side::Player));
        let lines = CAPTURED.lock().unwrap();
        assert!(lines
            .iter()
            .any(|(level, msg)| *level == Level::Warn && msg.contains("(4, 4) rejected")));
    }
}
