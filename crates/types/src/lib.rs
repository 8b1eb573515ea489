//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The bucket is fixed at 10 columns by 20 rows:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (5, 1); every spawn shape occupies rows 0 and 1 only
//!
//! # Timing Constants
//!
//! All durations are integer nanoseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_NS` | 16ms | Fixed simulation slice fed by the driver |
//! | `BASE_GRAVITY_NS` | 1s | Gravity interval at level 1 |
//! | `SOFT_DROP_GRAVITY_NS` | 100ms | Gravity interval while soft drop is held |
//! | `GRAVITY_FLOOR_NS` | 20ms | Gravity interval from level 29 onward |
//!
//! # Examples
//!
//! ```
//! use bucket_tetris_types::{MoveDirection, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_eq!(MoveDirection::Right.dx(), 1);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column
pub const SPAWN_X: i8 = 5;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 1;

pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Fixed simulation slice (16ms)
pub const TICK_NS: u64 = 16 * NANOS_PER_MILLI;

/// Gravity interval at level 1 (one row per second)
pub const BASE_GRAVITY_NS: u64 = 1_000 * NANOS_PER_MILLI;

/// Gravity interval while the soft-drop key is held, unless the level is already faster
pub const SOFT_DROP_GRAVITY_NS: u64 = 100 * NANOS_PER_MILLI;

/// Gravity interval once `GRAVITY_FLOOR_LEVEL` is reached
pub const GRAVITY_FLOOR_NS: u64 = 20 * NANOS_PER_MILLI;

/// Highest level that still speeds gravity up by 4/5 on level-up
pub const SPEEDUP_MAX_LEVEL: u32 = 10;

/// Level at which gravity is pinned to `GRAVITY_FLOOR_NS`
pub const GRAVITY_FLOOR_LEVEL: u32 = 29;

pub const GRAVITY_SPEEDUP_NUMERATOR: u64 = 4;
pub const GRAVITY_SPEEDUP_DENOMINATOR: u64 = 5;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// Line clear scoring table (classic Nintendo values, no level multiplier)
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Soft-drop hold timeout for terminals that never report key releases
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Row-major occupancy grid, `grid[row][column]`, row 0 at the top.
pub type Grid = [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in the order the random source indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Lowercase letter used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Pending horizontal move intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDirection {
    #[default]
    None,
    Left,
    Right,
}

impl MoveDirection {
    /// Column delta applied by this intent
    pub fn dx(&self) -> i8 {
        match self {
            MoveDirection::None => 0,
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }
}

/// Intents the input collaborator feeds into the engine
///
/// Move and rotate are one-shot: the engine applies them on the next tick and
/// clears them. Soft drop is a held state toggled by start/stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece 90° clockwise (the only rotation direction)
    Rotate,
    /// Switch to accelerated gravity
    SoftDropStart,
    /// Return to the level's gravity
    SoftDropStop,
    /// Throw the current game away and start a fresh one
    Reset,
}

/// Summary of one lock event, consumed by observers (logging, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows removed by this lock (0-4)
    pub lines_filled: u32,
    /// Points added to the score
    pub points: u32,
    /// Whether this lock raised the level
    pub level_up: bool,
}
