//! Common types for salvo: coordinates, cell states, sides, shot outcomes
//! and the error taxonomy shared by every layer.

use core::fmt;
use rand::Rng;

/// A `(row, col)` position on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when both components lie in `[0, size)`.
    pub const fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Draw uniformly random coordinates on a `size × size` grid until one
    /// satisfies `accept`.
    ///
    /// Rejection sampling gives up after `attempts` draws and then picks
    /// uniformly among every accepted coordinate, so the call terminates even
    /// when almost nothing is left. Returns `None` only when no coordinate is
    /// acceptable.
    pub fn random_where<R, F>(size: usize, attempts: usize, rng: &mut R, mut accept: F) -> Option<Coord>
    where
        R: Rng + ?Sized,
        F: FnMut(Coord) -> bool,
    {
        if size == 0 {
            return None;
        }
        for _ in 0..attempts {
            let coord = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            if accept(coord) {
                return Some(coord);
            }
        }
        let candidates = (0..size * size)
            .map(|i| Coord::new(i / size, i % size))
            .filter(|c| accept(*c))
            .count();
        if candidates == 0 {
            return None;
        }
        let pick = rng.random_range(0..candidates);
        (0..size * size)
            .map(|i| Coord::new(i / size, i % size))
            .filter(|c| accept(*c))
            .nth(pick)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Untouched, no ship.
    #[default]
    Water,
    /// Untouched, holds a ship.
    Ship,
    /// Ship cell that has been shot.
    Hit,
    /// Water cell that has been shot.
    Miss,
}

impl Cell {
    /// `true` once the cell has been fired upon.
    pub const fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// One of the two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The human seat in interactive play.
    Player,
    /// The computer.
    Opponent,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// An untouched ship cell was struck.
    Hit,
    /// Water, or a cell that was already resolved.
    Miss,
}

impl ShotOutcome {
    pub const fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Which setup parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size outside `[min, max]`.
    BoardSize { size: usize, min: usize, max: usize },
    /// Ship count outside `[1, max]` for the chosen board.
    ShipCount { count: usize, max: usize },
    /// Round count outside `[1, max]`.
    Rounds { rounds: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize { size, min, max } => {
                write!(f, "board size {} is not between {} and {}", size, min, max)
            }
            ConfigError::ShipCount { count, max } => {
                write!(f, "ship count {} is not between 1 and {}", count, max)
            }
            ConfigError::Rounds { rounds, max } => {
                write!(f, "round count {} is not between 1 and {}", rounds, max)
            }
        }
    }
}

/// Errors returned by board, placement and turn operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board size, ship count or round count outside accepted bounds.
    InvalidConfig(ConfigError),
    /// Coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Coordinate was already fired upon.
    AlreadyResolved(Coord),
    /// Manual placement onto a cell that already holds a ship.
    ShipOverlaps(Coord),
    /// The game has ended; no further shots are accepted.
    GameOver,
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfig(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
            GameError::OutOfBounds(c) => write!(f, "Coordinate {} is out of bounds", c),
            GameError::AlreadyResolved(c) => write!(f, "Coordinate {} was already fired upon", c),
            GameError::ShipOverlaps(c) => write!(f, "A ship already occupies {}", c),
            GameError::GameOver => write!(f, "The game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
