//! Commonly used types and utilities for ease of import.

pub use crate::{
    fire, place_ship_at, place_ships, AiPlayer, Board, BoardView, Cell, Coord, GameConfig,
    GameEngine, GameError, GameStatus, Player, Scoreboard, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_coord, CliPlayer};
