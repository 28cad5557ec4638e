//! Key mapping from terminal events to player intents.

use crate::types::{Difficulty, Direction, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an intent.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Intent::Quit);
    }

    match key.code {
        // Steering (arrows, WASD, vi keys)
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => {
            Some(Intent::Direction(Direction::Up))
        }
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => {
            Some(Intent::Direction(Direction::Down))
        }
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => {
            Some(Intent::Direction(Direction::Left))
        }
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => {
            Some(Intent::Direction(Direction::Right))
        }

        // Session control
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),
        KeyCode::Enter => Some(Intent::Confirm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Intent::Back),

        // Menu shortcuts
        KeyCode::Char('1') => Some(Intent::Difficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Intent::Difficulty(Difficulty::Normal)),
        KeyCode::Char('3') => Some(Intent::Difficulty(Difficulty::Hard)),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_steering_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(Intent::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Intent::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('J'))),
            Some(Intent::Direction(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(Intent::Direction(Direction::Right))
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Intent::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(Intent::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Intent::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('R'))), Some(Intent::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Intent::Back));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('m'))), Some(Intent::Back));
    }

    #[test]
    fn test_difficulty_shortcuts() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('1'))),
            Some(Intent::Difficulty(Difficulty::Easy))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('3'))),
            Some(Intent::Difficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
