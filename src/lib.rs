//! Bucket Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `bucket_tetris::{core,input,term,types}`
//! and holds the runtime glue shared by the binary: configuration and logging.

pub mod config;
pub mod logging;

pub use bucket_tetris_core as core;
pub use bucket_tetris_input as input;
pub use bucket_tetris_term as term;
pub use bucket_tetris_types as types;

pub use config::Config;
