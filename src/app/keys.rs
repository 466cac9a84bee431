//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::controller::Action;
use crate::types::Mode;

/// Maps terminal key events to [`Action`]s.
///
/// | Key            | Action           |
/// |----------------|------------------|
/// | `q`, `Ctrl-C`  | quit             |
/// | `Space`        | start / pause    |
/// | `r`            | reset            |
/// | `1`-`6`        | select mode      |
/// | `w` / `x`      | stopwatch toggle / reset |
/// | `Up`, `k`      | increase setting |
/// | `Down`, `j`    | decrease setting |
/// | `Left`, `h`    | previous setting |
/// | `Right`, `l`   | next setting     |
/// | `Enter`        | confirm setup    |
/// | `s`            | toggle sound     |
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap;

impl KeyMap {
    pub fn new() -> Self {
        Self
    }

    /// Returns the action bound to `key`, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Quit),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Char(' ') => Action::StartPause,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Up => Action::Increase,
            KeyCode::Down => Action::Decrease,
            KeyCode::Left => Action::PrevSetting,
            KeyCode::Right => Action::NextSetting,
            KeyCode::Char(c) => return Self::char_action(c.to_ascii_lowercase()),
            _ => return None,
        };
        Some(action)
    }

    fn char_action(c: char) -> Option<Action> {
        let action = match c {
            'q' => Action::Quit,
            'r' => Action::Reset,
            '1' => Action::SelectMode(Mode::Clock),
            '2' => Action::SelectMode(Mode::Emom),
            '3' => Action::SelectMode(Mode::Tabata),
            '4' => Action::SelectMode(Mode::Amrap),
            '5' => Action::SelectMode(Mode::Custom),
            '6' => Action::SelectMode(Mode::Stopwatch),
            'w' => Action::StopwatchToggle,
            'x' => Action::StopwatchReset,
            'k' => Action::Increase,
            'j' => Action::Decrease,
            'h' => Action::PrevSetting,
            'l' => Action::NextSetting,
            's' => Action::ToggleSound,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let keys = KeyMap::new();
        assert_eq!(keys.action_for(&key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            keys.action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_unbound() {
        assert_eq!(KeyMap::new().action_for(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_mode_keys() {
        let keys = KeyMap::new();
        let modes: Vec<Option<Action>> = ('1'..='6')
            .map(|c| keys.action_for(&key(KeyCode::Char(c))))
            .collect();
        let expected: Vec<Option<Action>> = Mode::ALL
            .iter()
            .map(|m| Some(Action::SelectMode(*m)))
            .collect();
        assert_eq!(modes, expected);
    }

    #[test]
    fn test_arrows_and_vim_keys_agree() {
        let keys = KeyMap::new();
        let pairs = [
            (KeyCode::Up, 'k'),
            (KeyCode::Down, 'j'),
            (KeyCode::Left, 'h'),
            (KeyCode::Right, 'l'),
        ];
        for (arrow, letter) in pairs {
            assert_eq!(
                keys.action_for(&key(arrow)),
                keys.action_for(&key(KeyCode::Char(letter)))
            );
        }
    }

    #[test]
    fn test_control_keys() {
        let keys = KeyMap::new();
        assert_eq!(keys.action_for(&key(KeyCode::Char(' '))), Some(Action::StartPause));
        assert_eq!(keys.action_for(&key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(keys.action_for(&key(KeyCode::Char('R'))), Some(Action::Reset));
        assert_eq!(keys.action_for(&key(KeyCode::Char('w'))), Some(Action::StopwatchToggle));
        assert_eq!(keys.action_for(&key(KeyCode::Char('x'))), Some(Action::StopwatchReset));
        assert_eq!(keys.action_for(&key(KeyCode::Char('s'))), Some(Action::ToggleSound));
        assert_eq!(keys.action_for(&key(KeyCode::Esc)), None);
    }
}
