//! Snapshot module - an immutable copy of everything a renderer needs
//!
//! Taken between ticks, so the renderer never observes a half-applied update.

use crate::pieces::Piece;
use crate::types::{Grid, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Occupancy including the active piece
    pub grid: Grid,
    /// Preview piece (kind and orientation; anchored at the origin)
    pub next: Piece,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Number of occupied cells in the grid
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&cell| cell).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            next: Piece::i(),
            score: 0,
            level: START_LEVEL,
            lines: 0,
            game_over: false,
        }
    }
}
