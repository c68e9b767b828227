//! Keyboard and mouse mapping.
//!
//! Every control resolves to one [`Action`], and every action maps to exactly
//! one controller handler.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ducklett_runtime::Field;

/// Two clicks on the character within this window count as a double-click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Yes,
    No,
    Submit,
    Reset,
    ToggleTheme,
    Poke,
    Focus(Field),
    FocusNext,
    Input(char),
    Backspace,
    Quit,
}

/// Map a key press. `typing` is true while the date/time form has focus,
/// in which case letters go into the field.
pub fn map_key(key: KeyEvent, typing: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // global in every mode
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::F(2) => return Some(Action::ToggleTheme),
        _ => {}
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    if typing {
        return match key.code {
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
            KeyCode::Enter => Some(Action::Submit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('s' | 'S' | 'y' | 'Y') => Some(Action::Yes),
        KeyCode::Char('n' | 'N') => Some(Action::No),
        KeyCode::Char('t' | 'T') => Some(Action::ToggleTheme),
        KeyCode::Char('r' | 'R') => Some(Action::Reset),
        KeyCode::Char('d' | 'D') => Some(Action::Poke),
        KeyCode::Char('q' | 'Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Detects double-clicks from a stream of single clicks
#[derive(Debug, Default)]
pub struct ClickTracker {
    last: Option<Instant>,
}

impl ClickTracker {
    /// Record a click; true when it completes a double-click
    pub fn register(&mut self, now: Instant) -> bool {
        match self.last.take() {
            Some(previous) if now.saturating_duration_since(previous) <= DOUBLE_CLICK_WINDOW => {
                true
            }
            _ => {
                self.last = Some(now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_idle_keys() {
        assert_eq!(map_key(press(KeyCode::Char('s')), false), Some(Action::Yes));
        assert_eq!(map_key(press(KeyCode::Char('y')), false), Some(Action::Yes));
        assert_eq!(map_key(press(KeyCode::Char('n')), false), Some(Action::No));
        assert_eq!(map_key(press(KeyCode::Char('t')), false), Some(Action::ToggleTheme));
        assert_eq!(map_key(press(KeyCode::Char('r')), false), Some(Action::Reset));
        assert_eq!(map_key(press(KeyCode::Char('d')), false), Some(Action::Poke));
        assert_eq!(map_key(press(KeyCode::Char('q')), false), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn test_typing_captures_letters() {
        assert_eq!(map_key(press(KeyCode::Char('n')), true), Some(Action::Input('n')));
        assert_eq!(map_key(press(KeyCode::Char('q')), true), Some(Action::Input('q')));
        assert_eq!(map_key(press(KeyCode::Tab), true), Some(Action::FocusNext));
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(Action::Submit));
        assert_eq!(map_key(press(KeyCode::Backspace), true), Some(Action::Backspace));
    }

    #[test]
    fn test_global_keys_while_typing() {
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::F(2)), true), Some(Action::ToggleTheme));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, true), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, false), Some(Action::Quit));
    }

    #[test]
    fn test_double_click_window() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::default();

        assert!(!clicks.register(t0));
        assert!(clicks.register(t0 + Duration::from_millis(300)));
        // a third click starts over
        assert!(!clicks.register(t0 + Duration::from_millis(350)));
        assert!(!clicks.register(t0 + Duration::from_millis(900)));
        assert!(clicks.register(t0 + Duration::from_millis(1000)));
    }
}
