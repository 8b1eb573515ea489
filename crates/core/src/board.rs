//! Board module - the 10x20 bucket of occupied cells
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! A cell is either free or occupied; the active piece is written into the grid
//! between ticks, so collision checks only ever look at the grid.

use crate::types::{Grid, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 20 rows of 10 occupancy flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[false; WIDTH]; HEIGHT],
        }
    }

    /// Build a board from an existing grid
    pub fn from_grid(rows: Grid) -> Self {
        Self { rows }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|(cx, cy)| self.rows[cy][cx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some((cx, cy)) => {
                self.rows[cy][cx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Whether every cell fits: in bounds and empty
    pub fn fits(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Whether any in-bounds cell is already occupied
    pub fn overlaps(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().any(|&(x, y)| self.is_occupied(x, y))
    }

    /// Mark cells as occupied
    pub fn occupy(&mut self, cells: &[(i8, i8)]) {
        for &(x, y) in cells {
            let placed = self.set(x, y, true);
            debug_assert!(placed, "occupying out-of-bounds cell ({x}, {y})");
        }
    }

    /// Mark cells as free
    pub fn vacate(&mut self, cells: &[(i8, i8)]) {
        for &(x, y) in cells {
            self.set(x, y, false);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.rows[y].iter().all(|&cell| cell)
    }

    /// Number of occupied cells in a row
    pub fn row_count(&self, y: usize) -> usize {
        self.rows
            .get(y)
            .map_or(0, |row| row.iter().filter(|&&cell| cell).count())
    }

    /// Total number of occupied cells
    pub fn occupied_count(&self) -> usize {
        (0..HEIGHT).map(|y| self.row_count(y)).sum()
    }

    /// Empty row `y` and collapse it out of the stack.
    ///
    /// The emptied row is swapped upward one step at a time until it reaches
    /// row 0, so every row above `y` ends up one lower.
    /// Returns false if `y` is out of bounds.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }

        self.rows[y] = [false; WIDTH];
        for row in (1..=y).rev() {
            self.rows.swap(row, row - 1);
        }

        true
    }

    /// Borrow the occupancy grid
    pub fn grid(&self) -> &Grid {
        &self.rows
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [[false; WIDTH]; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
