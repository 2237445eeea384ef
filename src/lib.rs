#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ai;
mod board;
mod common;
mod config;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
#[cfg(feature = "std")]
pub mod setup;
pub mod shot;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{place_ship_at, place_ships};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::*;
pub use shot::fire;
pub use ui::BoardView;
