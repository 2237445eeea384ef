#![cfg(feature = "std")]

//! Interactive collection of session parameters.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::common::{ConfigError, GameError};
use crate::config::{check_board_size, ship_capacity, GameConfig, MAX_BOARD_SIZE, MAX_ROUNDS, MIN_BOARD_SIZE};

/// Values supplied up front, e.g. from command-line flags. Missing or invalid
/// values are asked for interactively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupPreset {
    pub size: Option<usize>,
    pub ships: Option<usize>,
    pub rounds: Option<u32>,
}

fn ask<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => writeln!(output, "Invalid input. Please enter a number.")?,
        }
    }
}

/// Collect a valid [`GameConfig`], re-asking for whatever is rejected.
///
/// Returns `Ok(None)` if the input closes before setup completes.
pub fn prompt_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preset: SetupPreset,
) -> io::Result<Option<GameConfig>> {
    let SetupPreset {
        mut size,
        mut ships,
        mut rounds,
    } = preset;
    loop {
        let s = match size {
            Some(s) => s,
            None => {
                let prompt = format!(
                    "Enter the size of the board ({} to {}, e.g. 5 for a 5x5 board): ",
                    MIN_BOARD_SIZE, MAX_BOARD_SIZE
                );
                match ask(input, output, &prompt)? {
                    Some(s) => s,
                    None => return Ok(None),
                }
            }
        };
        if let Err(err) = check_board_size(s) {
            writeln!(output, "{}", err)?;
            size = None;
            ships = None;
            continue;
        }
        size = Some(s);

        let k = match ships {
            Some(k) => k,
            None => {
                let prompt = format!("Enter the number of ships (1 to {}): ", ship_capacity(s));
                match ask(input, output, &prompt)? {
                    Some(k) => k,
                    None => return Ok(None),
                }
            }
        };
        ships = Some(k);

        let r = match rounds {
            Some(r) => r,
            None if preset.rounds.is_some() => {
                let prompt = format!("Enter the number of rounds (1 to {}): ", MAX_ROUNDS);
                match ask(input, output, &prompt)? {
                    Some(r) => r,
                    None => return Ok(None),
                }
            }
            None => 1,
        };
        rounds = Some(r);

        match GameConfig::new(s, k, r) {
            Ok(config) => return Ok(Some(config)),
            Err(err) => {
                writeln!(output, "{}", err)?;
                match err {
                    GameError::InvalidConfig(ConfigError::Rounds { .. }) => rounds = None,
                    GameError::InvalidConfig(ConfigError::BoardSize { .. }) => size = None,
                    _ => ships = None,
                }
            }
        }
    }
}
