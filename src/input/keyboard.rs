//! Keyboard mapping for the drill
//!
//! Answer cells only ever take digits, a minus sign and a decimal
//! point, so the letter keys are free to act as the control surface:
//! start, pause, stop, reset, new puzzle, operation and difficulty
//! switching. Arrows and Tab/Shift-Tab drive the cursor. Everything
//! else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::navigation::Direction;

/// One game command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Stop,
    Reset,
    NewPuzzle,
    CycleOperation,
    CycleDifficulty,
    Move(Direction),
    TabForward,
    TabBackward,
    /// Append one character to the selected cell's answer.
    Type(char),
    /// Remove the last character of the selected cell's answer.
    Erase,
    /// Clear the selected cell's answer entirely.
    ClearCell,
    Quit,
}

/// Decodes a key event into a command, or None for keys the game does
/// not use. Release and repeat-release events are ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Tab => Some(Command::TabForward),
        KeyCode::BackTab => Some(Command::TabBackward),
        KeyCode::Backspace => Some(Command::Erase),
        KeyCode::Delete => Some(Command::ClearCell),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
            Some(Command::Type(c))
        }
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            's' => Some(Command::Start),
            'p' => Some(Command::Pause),
            'e' => Some(Command::Stop),
            'r' => Some(Command::Reset),
            'n' => Some(Command::NewPuzzle),
            'o' => Some(Command::CycleOperation),
            'd' => Some(Command::CycleDifficulty),
            'q' => Some(Command::Quit),
            _ => None,
        },
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
    fn arrows_move_the_cursor() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Down)),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn tab_order_keys() {
        assert_eq!(map_key(press(KeyCode::Tab)), Some(Command::TabForward));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Command::TabBackward)
        );
    }

    #[test]
    fn answer_characters_are_typed() {
        for c in ['0', '5', '9', '-', '.'] {
            assert_eq!(map_key(press(KeyCode::Char(c))), Some(Command::Type(c)));
        }
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Command::Erase));
        assert_eq!(map_key(press(KeyCode::Delete)), Some(Command::ClearCell));
    }

    #[test]
    fn control_letters() {
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(Command::Start));
        assert_eq!(map_key(press(KeyCode::Char('p'))), Some(Command::Pause));
        assert_eq!(map_key(press(KeyCode::Char('e'))), Some(Command::Stop));
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(map_key(press(KeyCode::Char('n'))), Some(Command::NewPuzzle));
        assert_eq!(
            map_key(press(KeyCode::Char('o'))),
            Some(Command::CycleOperation)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('d'))),
            Some(Command::CycleDifficulty)
        );
        // Case insensitive.
        assert_eq!(map_key(press(KeyCode::Char('S'))), Some(Command::Start));
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
    fn unused_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
        assert_eq!(map_key(press(KeyCode::Home)), None);
        assert_eq!(map_key(press(KeyCode::F(1))), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Char('s'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }
}
