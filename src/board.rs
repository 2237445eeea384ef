//! Game board state: a square grid of [`Cell`]s.

use crate::common::{Cell, Coord, GameError};
use crate::config::check_board_size;
use alloc::vec;
use alloc::vec::Vec;

/// A `size × size` grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-water board. Fails with `InvalidConfig` for sizes outside
    /// the accepted range.
    pub fn new(size: usize) -> Result<Self, GameError> {
        check_board_size(size)?;
        Ok(Board {
            size,
            cells: vec![Cell::Water; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Result<usize, GameError> {
        if coord.in_bounds(self.size) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(GameError::OutOfBounds(coord))
        }
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Only placement and shot resolution call this.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GameError> {
        let i = self.index(coord)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// `true` if `coord` is on the board and has not been fired upon.
    pub fn is_fresh(&self, coord: Coord) -> Result<bool, GameError> {
        self.cell(coord).map(|c| !c.is_resolved())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Ship cells that have not been hit yet.
    pub fn ships_afloat(&self) -> usize {
        self.count(Cell::Ship)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size * size).map(move |i| Coord::new(i / size, i % size))
    }
}
