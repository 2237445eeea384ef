use crate::common::{ConfigError, GameError, Side};

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 10;
pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_SHIPS: usize = 3;
pub const MAX_ROUNDS: u32 = 99;

/// The human seat always opens the game.
pub const FIRST_TO_MOVE: Side = Side::Player;

/// Random draws tried before sampling falls back to an exhaustive pick.
pub const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Largest fleet a `size × size` board accepts: a third of its cells,
/// rounded down.
pub const fn ship_capacity(size: usize) -> usize {
    size * size / 3
}

pub fn check_board_size(size: usize) -> Result<(), GameError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::BoardSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        }
        .into())
    }
}

pub fn check_ship_count(size: usize, count: usize) -> Result<(), GameError> {
    let max = ship_capacity(size);
    if count == 0 || count > max {
        return Err(ConfigError::ShipCount { count, max }.into());
    }
    Ok(())
}

/// Validated setup parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub ships: usize,
    pub rounds: u32,
}

impl GameConfig {
    pub fn new(size: usize, ships: usize, rounds: u32) -> Result<Self, GameError> {
        check_board_size(size)?;
        check_ship_count(size, ships)?;
        if rounds == 0 || rounds > MAX_ROUNDS {
            return Err(ConfigError::Rounds {
                rounds,
                max: MAX_ROUNDS,
            }
            .into());
        }
        Ok(Self { size, ships, rounds })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            ships: DEFAULT_SHIPS,
            rounds: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_a_third_of_the_board() {
        assert_eq!(ship_capacity(2), 1);
        assert_eq!(ship_capacity(3), 3);
        assert_eq!(ship_capacity(5), 8);
        assert_eq!(ship_capacity(10), 33);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(GameConfig::new(1, 1, 1).is_err());
        assert!(GameConfig::new(11, 1, 1).is_err());
        assert_eq!(
            GameConfig::new(3, 8, 1),
            Err(GameError::InvalidConfig(ConfigError::ShipCount { count: 8, max: 3 }))
        );
        assert!(GameConfig::new(5, 0, 1).is_err());
        assert!(GameConfig::new(5, 3, 0).is_err());
        assert_eq!(GameConfig::new(5, 3, 2).map(|c| c.rounds), Ok(2));
    }
}
