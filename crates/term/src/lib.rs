//! Terminal "game renderer" module.
//!
//! Renders the bucket into a simple framebuffer that is then flushed to a
//! terminal backend, writing only what changed since the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so it can be asserted on cell by cell

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use bucket_tetris_core as core;
pub use bucket_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
