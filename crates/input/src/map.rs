//! Key mapping from terminal events to game actions.
//!
//! The number-row layout (`7` left, `9` right, `8` rotate, `4` soft drop) sits
//! next to arrow keys and WASD.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Soft drop maps to its start edge; the stop edge comes from
/// [`crate::InputHandler`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('7') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('9') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDropStart)
        }

        // Rotation (clockwise only)
        KeyCode::Up | KeyCode::Char('8') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Rotate)
        }

        KeyCode::Char(' ') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn action(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_number_row_layout() {
        assert_eq!(action(KeyCode::Char('7')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('9')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('8')), Some(GameAction::Rotate));
        assert_eq!(action(KeyCode::Char('4')), Some(GameAction::SoftDropStart));
        assert_eq!(action(KeyCode::Char(' ')), Some(GameAction::Reset));
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(action(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Down), Some(GameAction::SoftDropStart));

        assert_eq!(action(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('S')), Some(GameAction::SoftDropStart));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(action(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(action(KeyCode::Char('w')), Some(GameAction::Rotate));
        assert_eq!(action(KeyCode::Char('W')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(action(KeyCode::Char('x')), None);
        assert_eq!(action(KeyCode::Char('5')), None);
        assert_eq!(action(KeyCode::Enter), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
