//! Text rendering of boards.

use crate::board::Board;
use crate::common::Cell;
use core::fmt;

/// Glyph for a cell; concealed ships look like water.
pub fn cell_glyph(cell: Cell, conceal: bool) -> char {
    match cell {
        Cell::Water => '~',
        Cell::Ship if conceal => '~',
        Cell::Ship => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'O',
    }
}

/// Displays a board with row and column indices.
///
/// ```text
///   0 1 2
/// 0 ~ S ~
/// 1 O ~ X
/// 2 ~ ~ ~
/// ```
pub struct BoardView<'a> {
    board: &'a Board,
    conceal: bool,
}

impl<'a> BoardView<'a> {
    /// Show every ship.
    pub fn revealed(board: &'a Board) -> Self {
        Self { board, conceal: false }
    }

    /// Hide ships that have not been hit.
    pub fn concealed(board: &'a Board) -> Self {
        Self { board, conceal: true }
    }

    pub fn new(board: &'a Board, conceal: bool) -> Self {
        Self { board, conceal }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.board.size() {
            if c > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.board.rows().enumerate() {
            write!(f, "{}", r)?;
            for &cell in row {
                write!(f, " {}", cell_glyph(cell, self.conceal))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
