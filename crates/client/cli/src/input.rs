//! Keyboard mapping for the game loop.
//!
//! Unrecognized keys map to `None` and never reach the core, so they
//! cannot consume a move.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minefield_core::Direction;

/// Player intent decoded from one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Map a key event to a command. WASD and arrow keys move; `q`, `Esc`,
/// and Ctrl-C quit.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_and_arrows_map_to_directions() {
        assert_eq!(
            map_key(press(KeyCode::Char('w'))),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('D'))),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Down)),
            Some(Command::Move(Direction::Down))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = press(KeyCode::Char('w'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
