//! Terminal event polling

use coverplan_app::message::Message;
use coverplan_app::InputKey;
use coverplan_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Frame interval; a quiet poll becomes a Tick for the spinner
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Map a crossterm key to the keys the handlers understand
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        _ => return None,
    };
    Some(input)
}

/// Wait up to one frame for input.
///
/// Returns `Tick` when nothing arrived, `None` for events the app ignores
/// (releases, resizes, mouse).
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(plain(KeyCode::Char('[')), Some(InputKey::Char('[')));
        assert_eq!(plain(KeyCode::Char('A')), Some(InputKey::Char('A')));
    }

    #[test]
    fn test_ctrl_chars_are_lowercased() {
        let key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('s')));

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_slider_keys() {
        assert_eq!(plain(KeyCode::Left), Some(InputKey::Left));
        assert_eq!(plain(KeyCode::Right), Some(InputKey::Right));
        assert_eq!(plain(KeyCode::Home), Some(InputKey::Home));
        assert_eq!(plain(KeyCode::End), Some(InputKey::End));
        assert_eq!(plain(KeyCode::PageUp), Some(InputKey::PageUp));
        assert_eq!(plain(KeyCode::PageDown), Some(InputKey::PageDown));
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(plain(KeyCode::Enter), Some(InputKey::Enter));
        assert_eq!(plain(KeyCode::Esc), Some(InputKey::Esc));
        assert_eq!(plain(KeyCode::Tab), Some(InputKey::Tab));
        assert_eq!(plain(KeyCode::Backspace), Some(InputKey::Backspace));
    }

    #[test]
    fn test_shift_tab_becomes_backtab() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        assert_eq!(plain(KeyCode::BackTab), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(plain(KeyCode::F(5)), None);
        assert_eq!(plain(KeyCode::Insert), None);
        assert_eq!(plain(KeyCode::Delete), None);
    }
}
