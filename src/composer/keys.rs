//! Keyboard input as seen by the commit form.
//!
//! Terminal key events are narrowed to [`Key`], which carries only what the form and
//! its text editors react to. Ctrl+C becomes [`Key::Interrupt`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Hard interrupt (Ctrl+C)
    Interrupt,
    Char(char),
    Enter,
    Insert,
    Esc,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    /// Ctrl+W
    DeleteWordBackward,
}

impl Key {
    /// Convert a terminal key event. Key releases and keys the form never handles
    /// map to `None`.
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let key = match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Key::Interrupt,
            KeyCode::Char('w') if ctrl => Key::DeleteWordBackward,
            KeyCode::Char('a') if ctrl => Key::Home,
            KeyCode::Char('e') if ctrl => Key::End,
            KeyCode::Char(_) if ctrl => return None,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Insert => Key::Insert,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            _ => return None,
        };
        Some(key)
    }
}
