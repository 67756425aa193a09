use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::action::Key;

/// Block until a keystroke arrives and decode it into a logical [`Key`].
///
/// No timeout: the loop has nothing to do between keys. A terminal resize
/// surfaces as `Key::Other` so the caller redraws at the new size.
pub fn read_key() -> std::io::Result<Key> {
    loop {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                return Ok(decode(key_event.code, key_event.modifiers));
            }
            Event::Resize(_, _) => return Ok(Key::Other),
            _ => {}
        }
    }
}

fn decode(code: KeyCode, modifiers: KeyModifiers) -> Key {
    match (modifiers, code) {
        // Raw mode delivers the interrupt character as a key event
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Key::Interrupt,
        // Ctrl+J is ASCII LF; counts as Enter alongside CR
        (KeyModifiers::CONTROL, KeyCode::Char('j')) => Key::Confirm,
        (_, KeyCode::Enter) => Key::Confirm,
        (_, KeyCode::Char('d')) => Key::Decrement,
        (_, KeyCode::Char('r')) => Key::Reset,
        (_, KeyCode::Up) => Key::Up,
        (_, KeyCode::Down) => Key::Down,
        (_, KeyCode::Char('q')) => Key::Quit,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_core_bindings() {
        assert_eq!(decode(KeyCode::Enter, KeyModifiers::NONE), Key::Confirm);
        assert_eq!(decode(KeyCode::Char('d'), KeyModifiers::NONE), Key::Decrement);
        assert_eq!(decode(KeyCode::Char('r'), KeyModifiers::NONE), Key::Reset);
        assert_eq!(decode(KeyCode::Up, KeyModifiers::NONE), Key::Up);
        assert_eq!(decode(KeyCode::Down, KeyModifiers::NONE), Key::Down);
        assert_eq!(decode(KeyCode::Char('q'), KeyModifiers::NONE), Key::Quit);
    }

    #[test]
    fn test_decode_interrupt_and_lf() {
        assert_eq!(
            decode(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Key::Interrupt
        );
        assert_eq!(
            decode(KeyCode::Char('j'), KeyModifiers::CONTROL),
            Key::Confirm
        );
    }

    #[test]
    fn test_decode_unknown_keys_are_other() {
        assert_eq!(decode(KeyCode::Char('x'), KeyModifiers::NONE), Key::Other);
        assert_eq!(decode(KeyCode::Esc, KeyModifiers::NONE), Key::Other);
        assert_eq!(decode(KeyCode::Left, KeyModifiers::NONE), Key::Other);
    }
}
