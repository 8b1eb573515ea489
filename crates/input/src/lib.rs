//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides an
//! input handler that turns raw key events into press edges, including on
//! terminals that never report key releases.

pub mod handler;
pub mod map;

pub use bucket_tetris_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
