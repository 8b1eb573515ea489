//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on the terminal or input devices, making it:
//!
//! - **Deterministic**: Same seed and the same slices produce identical games
//! - **Testable**: Unit tests for every rule, driven by explicit time slices
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 bucket with collision checks and row collapse
//! - [`game_state`]: The engine - active/next piece, counters, gravity, intents
//! - [`pieces`]: Tetromino shapes and clockwise SRS rotation with wall kicks
//! - [`rng`]: Seeded, uniformly random piece generation
//! - [`scoring`]: Line scores, level boundary and the gravity policy
//! - [`snapshot`]: Copy of the state handed to renderers
//! - [`timing`]: Fixed-step accumulator for the driver loop
//!
//! # Game Rules
//!
//! - **Classic gravity**: No lock delay; a piece locks on the tick gravity cannot move it
//! - **Clockwise only**: One rotate action, SRS kick tables, O never kicks
//! - **Scoring**: 40/100/300/1200 for 1-4 rows in one lock, no level multiplier
//! - **Levels**: One level per 10 cleared lines, gravity 4/5 faster per level up to 10
//!
//! # Example
//!
//! ```
//! use bucket_tetris_core::GameState;
//! use bucket_tetris_types::{GameAction, TICK_NS};
//!
//! let mut game = GameState::new(12345);
//!
//! // First tick spawns the next piece
//! assert!(game.tick(TICK_NS));
//!
//! game.apply_action(GameAction::MoveRight);
//! assert!(game.tick(TICK_NS));
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! - **Tick Rate**: 16ms slices handed out by [`FixedStep`]
//! - **Gravity**: 1000ms at level 1, shrinking with level, 20ms from level 29
//! - **Soft Drop**: 100ms, or the level gravity when that is already faster

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use bucket_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{kick_table, spawn_shape, try_rotate, Piece};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{crosses_level_boundary, gravity_for_level, line_clear_score};
pub use snapshot::GameSnapshot;
pub use timing::FixedStep;
