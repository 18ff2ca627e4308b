use crate::app::config::binds::KeyMap;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User-level actions produced by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenSettings,
    CloseAllDialogs,
    CycleLanguage,
    Quit,
    Back,
    CursorUp,
    CursorDown,
    Activate,
    ValueNext,
    ValuePrevious,
}

/// Resolves key events to actions. Dialog bindings shadow global ones while
/// a dialog is open.
#[derive(Debug)]
pub struct KeyBinds {
    global_map: KeyMap,
    dialog_map: KeyMap,
}

impl KeyBinds {
    pub fn new(global_map: KeyMap, dialog_map: KeyMap) -> Self {
        Self {
            global_map,
            dialog_map,
        }
    }

    pub fn handle_key(&self, key: KeyEvent, dialog_open: bool) -> Option<UiAction> {
        let key_tuple = normalize(key.modifiers, key.code);

        if dialog_open && let Some(action) = self.dialog_map.get(&key_tuple) {
            return Some(*action);
        }

        self.global_map.get(&key_tuple).copied()
    }

    /// First binding of an action, formatted for hints
    pub fn describe(&self, action: UiAction) -> Option<String> {
        self.global_map
            .iter()
            .chain(self.dialog_map.iter())
            .filter(|(_, a)| **a == action)
            .map(|((modifiers, code), _)| format_key(*modifiers, *code))
            .min_by_key(|s| (s.len(), s.clone()))
    }
}

/// Some terminals report SHIFT for upper-case letters and some don't
fn normalize(modifiers: KeyModifiers, code: KeyCode) -> (KeyModifiers, KeyCode) {
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => (modifiers | KeyModifiers::SHIFT, code),
        _ => (modifiers, code),
    }
}

fn format_key(modifiers: KeyModifiers, code: KeyCode) -> String {
    let key_str = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    };

    let mut result = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        result.push_str("Alt+");
    }
    // Upper-case letters already show the shift
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        result.push_str("Shift+");
    }
    result.push_str(&key_str);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::binds::BindsConfig;

    fn binds() -> KeyBinds {
        let (global, dialog) = BindsConfig::default().build_key_maps();
        KeyBinds::new(global, dialog)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dialog_keys_only_when_open() {
        let binds = binds();
        assert_eq!(binds.handle_key(press(KeyCode::Esc), false), None);
        assert_eq!(
            binds.handle_key(press(KeyCode::Esc), true),
            Some(UiAction::Back)
        );
        assert_eq!(
            binds.handle_key(press(KeyCode::Down), true),
            Some(UiAction::CursorDown)
        );
    }

    #[test]
    fn test_global_keys_always_available() {
        let binds = binds();
        assert_eq!(
            binds.handle_key(press(KeyCode::Char('s')), false),
            Some(UiAction::OpenSettings)
        );
        assert_eq!(
            binds.handle_key(press(KeyCode::Char('q')), true),
            Some(UiAction::Quit)
        );
        assert_eq!(
            binds.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Some(UiAction::Quit)
        );
    }

    #[test]
    fn test_uppercase_without_shift_flag() {
        let mut config = BindsConfig::default();
        config.cycle_language = vec!["shift-g".to_string()];
        let (global, dialog) = config.build_key_maps();
        let binds = KeyBinds::new(global, dialog);

        assert_eq!(
            binds.handle_key(press(KeyCode::Char('G')), false),
            Some(UiAction::CycleLanguage)
        );
        assert_eq!(
            binds.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), false),
            Some(UiAction::CycleLanguage)
        );
        assert_eq!(binds.handle_key(press(KeyCode::Char('g')), false), None);
    }

    #[test]
    fn test_describe() {
        let binds = binds();
        assert_eq!(binds.describe(UiAction::OpenSettings).as_deref(), Some("s"));
        assert_eq!(binds.describe(UiAction::Back).as_deref(), Some("Esc"));
        assert_eq!(
            binds.describe(UiAction::CloseAllDialogs).as_deref(),
            Some("Ctrl+w")
        );
    }
}
