//! Press/held edge detection for terminal environments.
//!
//! Move and rotate act once per physical press: auto-repeat events for a key
//! that is already down are swallowed. Soft drop is a held state that starts on
//! the first press and stops on release.
//!
//! Many terminals never send release events. There, a key counts as released
//! once no event for it has arrived within the release timeout, so a second tap
//! of the same key inside that window reads as auto-repeat and is dropped.
//! Terminals that report event types (kitty keyboard protocol) send real
//! releases; with [`InputHandler::with_release_events`] the timeout is off and
//! every fresh press acts.

use crossterm::event::KeyCode;

use crate::map::handle_key_event;
use crate::types::{GameAction, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

/// One tracked key: whether it is down and how long since its last event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldKey {
    held: bool,
    idle_ms: u32,
}

impl HeldKey {
    /// Register a press; true only on the up-to-down edge.
    fn press(&mut self) -> bool {
        self.idle_ms = 0;
        !std::mem::replace(&mut self.held, true)
    }

    /// Register a release; true if the key was down.
    fn release(&mut self) -> bool {
        self.idle_ms = 0;
        std::mem::take(&mut self.held)
    }

    /// Advance the idle timer; true if this auto-released the key.
    fn age(&mut self, elapsed_ms: u32, timeout_ms: u32) -> bool {
        if !self.held {
            return false;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > timeout_ms {
            self.held = false;
            self.idle_ms = 0;
            return true;
        }
        false
    }
}

/// Tracks held keys and emits game actions on edges.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: HeldKey,
    right: HeldKey,
    rotate: HeldKey,
    soft_drop: HeldKey,
    key_release_timeout_ms: u32,
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: HeldKey::default(),
            right: HeldKey::default(),
            rotate: HeldKey::default(),
            soft_drop: HeldKey::default(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Trust release events instead of the idle timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop.held
    }

    fn key_for(&mut self, action: GameAction) -> Option<&mut HeldKey> {
        match action {
            GameAction::MoveLeft => Some(&mut self.left),
            GameAction::MoveRight => Some(&mut self.right),
            GameAction::Rotate => Some(&mut self.rotate),
            GameAction::SoftDropStart | GameAction::SoftDropStop => Some(&mut self.soft_drop),
            GameAction::Reset => None,
        }
    }

    /// Handle a press (or auto-repeat) of `code`.
    ///
    /// Returns the action to apply, or `None` for unmapped keys and repeats.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = handle_key_event(code.into())?;
        match self.key_for(action) {
            Some(key) => key.press().then_some(action),
            None => Some(action),
        }
    }

    /// Handle a release of `code`.
    ///
    /// Only soft drop produces an action on release.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = handle_key_event(code.into())?;
        let was_held = self.key_for(action).map_or(false, |key| key.release());
        (was_held && action == GameAction::SoftDropStart).then_some(GameAction::SoftDropStop)
    }

    /// Advance idle timers by `elapsed_ms`.
    ///
    /// Returns `SoftDropStop` when soft drop timed out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if self.release_events {
            return None;
        }
        let timeout = self.key_release_timeout_ms;
        self.left.age(elapsed_ms, timeout);
        self.right.age(elapsed_ms, timeout);
        self.rotate.age(elapsed_ms, timeout);
        self.soft_drop
            .age(elapsed_ms, timeout)
            .then_some(GameAction::SoftDropStop)
    }

    /// Forget every held key
    pub fn reset(&mut self) {
        *self = Self::new()
            .with_key_release_timeout_ms(self.key_release_timeout_ms)
            .with_release_events(self.release_events);
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
