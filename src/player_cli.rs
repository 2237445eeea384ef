#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;
use std::thread;
use std::time::Duration;

use crate::{
    board::Board,
    common::{Coord, GameError},
    game::ShotReport,
    ui::BoardView,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Parse a `"row col"` line into an in-bounds coordinate for a
/// `size × size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Please enter exactly two numbers separated by a space.".to_string());
    }
    let mut nums = [0i64; 2];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("Invalid input '{}'. Please enter numbers only.", part))?;
    }
    let [row, col] = nums;
    if size == 0 {
        return Err("The board has no cells.".to_string());
    }
    if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
        return Err(format!(
            "Coordinates are out of bounds. Use 0 to {} for both.",
            size - 1
        ));
    }
    Ok(Coord::new(row as usize, col as usize))
}

/// Human player reading shots from a line-based input and narrating the game.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    pause: Duration,
    own_ships: usize,
    enemy_ships: usize,
    retrying: bool,
    confirm_turns: bool,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause: Duration::ZERO,
            own_ships: 0,
            enemy_ships: 0,
            retrying: false,
            confirm_turns: false,
        }
    }

    /// Wait this long before announcing the computer's shot.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Wait for Enter after each exchange of shots.
    pub fn with_confirm_turns(mut self, confirm: bool) -> Self {
        self.confirm_turns = confirm;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Terminal output is best effort; a closed stdout shows up as EOF on input.
    fn say(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn new_game(&mut self, _size: usize, ships: usize) {
        self.own_ships = ships;
        self.enemy_ships = ships;
        self.retrying = false;
    }

    fn select_target(&mut self, _rng: &mut SmallRng, own: &Board, target: &Board) -> Option<Coord> {
        if !self.retrying {
            self.say(format_args!("\n--- YOUR TURN ---\nYour Board:\n{}", BoardView::revealed(own)));
            self.say(format_args!("\nComputer's Board:\n{}", BoardView::concealed(target)));
        }
        self.retrying = false;
        loop {
            self.say(format_args!("Enter coordinates for your shot (e.g., 3 1): "));
            let line = self.read_line()?;
            match parse_coord(&line, target.size()) {
                Ok(coord) => return Some(coord),
                Err(msg) => self.say(format_args!("Error: {}\n", msg)),
            }
        }
    }

    fn handle_rejected(&mut self, _coord: Coord, err: &GameError) {
        self.retrying = true;
        match err {
            GameError::AlreadyResolved(_) => {
                self.say(format_args!("You've already shot there. Try again.\n"))
            }
            other => self.say(format_args!("Error: {}\n", other)),
        }
    }

    fn handle_shot_result(&mut self, report: &ShotReport) {
        self.enemy_ships = report.ships_left;
        if report.outcome.is_hit() {
            self.say(format_args!("\nIT'S A HIT!\n"));
        } else {
            self.say(format_args!("\nYOU MISSED!\n"));
        }
    }

    fn handle_opponent_shot(&mut self, report: &ShotReport) {
        self.own_ships = report.ships_left;
        self.say(format_args!("\n--- COMPUTER'S TURN ---\n"));
        thread::sleep(self.pause);
        self.say(format_args!("The computer fires at {}...\n", report.coord));
        thread::sleep(self.pause);
        if report.outcome.is_hit() {
            self.say(format_args!("YOUR SHIP WAS HIT!\n"));
        } else {
            self.say(format_args!("THEY MISSED!\n"));
        }
        if report.winner.is_none() {
            let (own, enemy) = (self.own_ships, self.enemy_ships);
            self.say(format_args!(
                "\nShips remaining -> You: {} | Computer: {}\n",
                own, enemy
            ));
            if self.confirm_turns {
                self.say(format_args!("Press Enter to continue to the next turn..."));
                let _ = self.read_line();
            }
        }
    }
}
