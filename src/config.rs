//! Runtime configuration read from `TETRIS_*` environment variables.
//!
//! Every setting has a default. Unparseable values fall back to the default
//! and leave a warning in [`Config::warnings`], which the binary logs once the
//! subscriber is installed.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use crate::types::{DEFAULT_KEY_RELEASE_TIMEOUT_MS, NANOS_PER_MILLI, TICK_NS};

pub const ENV_SEED: &str = "TETRIS_SEED";
pub const ENV_TICK_MS: &str = "TETRIS_TICK_MS";
pub const ENV_LOG_PATH: &str = "TETRIS_LOG_PATH";
pub const ENV_LOG: &str = "TETRIS_LOG";
pub const ENV_KEY_RELEASE_TIMEOUT_MS: &str = "TETRIS_KEY_RELEASE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Piece generator seed; `None` seeds from the wall clock
    pub seed: Option<u32>,
    /// Fixed simulation slice
    pub tick_ms: u64,
    /// Log file; logging is off without one
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
    pub key_release_timeout_ms: u32,
    /// Problems found while reading the environment
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_NS / NANOS_PER_MILLI,
            log_path: None,
            log_level: Level::INFO,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        if let Some(raw) = get(ENV_SEED) {
            config.seed = config.parse(ENV_SEED, &raw);
        }

        if let Some(raw) = get(ENV_TICK_MS) {
            match config.parse::<u64>(ENV_TICK_MS, &raw) {
                Some(0) => config.warn(ENV_TICK_MS, &raw, "must be positive"),
                Some(ms) => config.tick_ms = ms,
                None => {}
            }
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        if let Some(raw) = get(ENV_LOG) {
            if let Some(level) = config.parse(ENV_LOG, &raw) {
                config.log_level = level;
            }
        }

        if let Some(raw) = get(ENV_KEY_RELEASE_TIMEOUT_MS) {
            if let Some(ms) = config.parse(ENV_KEY_RELEASE_TIMEOUT_MS, &raw) {
                config.key_release_timeout_ms = ms;
            }
        }

        config
    }

    /// Fixed simulation slice in nanoseconds
    pub fn tick_ns(&self) -> u64 {
        self.tick_ms.saturating_mul(NANOS_PER_MILLI)
    }

    fn parse<T: FromStr>(&mut self, key: &str, raw: &str) -> Option<T> {
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.warn(key, raw, "not a valid value");
                None
            }
        }
    }

    fn warn(&mut self, key: &str, raw: &str, reason: &str) {
        self.warnings
            .push(format!("{key}={raw:?} {reason}, using the default"));
    }
}
