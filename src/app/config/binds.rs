use crate::binds::UiAction;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type KeyMap = HashMap<(KeyModifiers, KeyCode), UiAction>;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BindsConfig {
    #[serde(default = "BindsConfig::default_open_settings")]
    pub open_settings: Vec<String>,
    #[serde(default = "BindsConfig::default_close_all_dialogs")]
    pub close_all_dialogs: Vec<String>,
    #[serde(default = "BindsConfig::default_cycle_language")]
    pub cycle_language: Vec<String>,
    #[serde(default = "BindsConfig::default_quit")]
    pub quit: Vec<String>,
    #[serde(default = "BindsConfig::default_back")]
    pub back: Vec<String>,
    #[serde(default = "BindsConfig::default_cursor_up")]
    pub cursor_up: Vec<String>,
    #[serde(default = "BindsConfig::default_cursor_down")]
    pub cursor_down: Vec<String>,
    #[serde(default = "BindsConfig::default_activate")]
    pub activate: Vec<String>,
    #[serde(default = "BindsConfig::default_value_next")]
    pub value_next: Vec<String>,
    #[serde(default = "BindsConfig::default_value_previous")]
    pub value_previous: Vec<String>,
}

impl Default for BindsConfig {
    fn default() -> Self {
        Self {
            open_settings: Self::default_open_settings(),
            close_all_dialogs: Self::default_close_all_dialogs(),
            cycle_language: Self::default_cycle_language(),
            quit: Self::default_quit(),
            back: Self::default_back(),
            cursor_up: Self::default_cursor_up(),
            cursor_down: Self::default_cursor_down(),
            activate: Self::default_activate(),
            value_next: Self::default_value_next(),
            value_previous: Self::default_value_previous(),
        }
    }
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl BindsConfig {
    fn default_open_settings() -> Vec<String> {
        keys(&["s", "f2"])
    }

    fn default_close_all_dialogs() -> Vec<String> {
        keys(&["ctrl-w"])
    }

    fn default_cycle_language() -> Vec<String> {
        keys(&["g"])
    }

    fn default_quit() -> Vec<String> {
        keys(&["q", "ctrl-c"])
    }

    fn default_back() -> Vec<String> {
        keys(&["esc", "backspace"])
    }

    fn default_cursor_up() -> Vec<String> {
        keys(&["k", "up"])
    }

    fn default_cursor_down() -> Vec<String> {
        keys(&["j", "down"])
    }

    fn default_activate() -> Vec<String> {
        keys(&["enter", "space"])
    }

    fn default_value_next() -> Vec<String> {
        keys(&["l", "right"])
    }

    fn default_value_previous() -> Vec<String> {
        keys(&["h", "left"])
    }

    /// Build the (global, dialog) key maps. Unparseable entries are logged and skipped.
    pub fn build_key_maps(&self) -> (KeyMap, KeyMap) {
        let mut global_map = KeyMap::new();
        let mut dialog_map = KeyMap::new();

        let global: [(&[String], UiAction); 4] = [
            (self.open_settings.as_slice(), UiAction::OpenSettings),
            (self.close_all_dialogs.as_slice(), UiAction::CloseAllDialogs),
            (self.cycle_language.as_slice(), UiAction::CycleLanguage),
            (self.quit.as_slice(), UiAction::Quit),
        ];
        let dialog: [(&[String], UiAction); 6] = [
            (self.back.as_slice(), UiAction::Back),
            (self.cursor_up.as_slice(), UiAction::CursorUp),
            (self.cursor_down.as_slice(), UiAction::CursorDown),
            (self.activate.as_slice(), UiAction::Activate),
            (self.value_next.as_slice(), UiAction::ValueNext),
            (self.value_previous.as_slice(), UiAction::ValuePrevious),
        ];

        for (bindings, action) in global {
            insert_bindings(&mut global_map, bindings, action);
        }
        for (bindings, action) in dialog {
            insert_bindings(&mut dialog_map, bindings, action);
        }

        (global_map, dialog_map)
    }
}

fn insert_bindings(map: &mut KeyMap, bindings: &[String], action: UiAction) {
    for binding in bindings {
        match parse_keybinding(binding) {
            Some(key) => {
                if let Some(previous) = map.insert(key, action) {
                    log::warn!(
                        "Key '{}' rebound from {:?} to {:?}",
                        binding,
                        previous,
                        action
                    );
                }
            }
            None => log::warn!("Invalid key binding '{}' for {:?}", binding, action),
        }
    }
}

/// Parse a key description like "ctrl-w", "shift-g", "esc" or "-"
pub fn parse_keybinding(key_str: &str) -> Option<(KeyModifiers, KeyCode)> {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "-" {
        return Some((KeyModifiers::NONE, KeyCode::Char('-')));
    }

    let parts: Vec<&str> = key_str.split('-').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts {
        match *part {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match *key_part {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "delete" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => {
            let ch = c.chars().next()?;
            // Terminals report shifted letters in upper case
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::Char(ch.to_ascii_uppercase())
            } else {
                KeyCode::Char(ch)
            }
        }
        _ => return None,
    };

    Some((modifiers, code))
}
