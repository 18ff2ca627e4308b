use crossterm::event::{Event, KeyEvent, KeyEventKind};

use super::App;
use crate::binds::UiAction;
use crate::bus::{EventBus, Notification};
use crate::panel::TB_UI_SETTINGS;

/// Trait for event handling
pub trait EventHandlers {
    fn handle_crossterm_event(&mut self, event: Event);
    fn on_key_event(&mut self, key: KeyEvent);
    fn apply_action(&mut self, action: UiAction);
    fn quit(&mut self);
}

impl EventHandlers for App {
    fn handle_crossterm_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.on_key_event(key);
        }
    }

    /// Resolve a key press to an action and apply it, then settle the bus.
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.show_config_warnings_popup {
            // Any key dismisses the warnings
            self.show_config_warnings_popup = false;
            return;
        }

        if let Some(action) = self.key_binds.handle_key(key, self.dialog_open()) {
            self.apply_action(action);
            self.dispatch_pending();
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        crate::app::logging::log_user_interaction(&format!("{:?}", action), None);

        match action {
            // The toolbar is covered while a dialog is up
            UiAction::OpenSettings if self.dialog_open() => {
                log::debug!("Ignoring toolbar action while a dialog is open");
            }
            UiAction::OpenSettings => self
                .bus
                .emit(Notification::ToolbarAction(TB_UI_SETTINGS.to_string())),
            UiAction::CloseAllDialogs => self.bus.emit(Notification::CloseDialog),
            UiAction::CycleLanguage => {
                let language = self.catalog.cycle_language();
                crate::app::logging::log_language_change(language.code());
                self.bus.emit(Notification::LangChanged);
            }
            UiAction::Quit => self.quit(),
            UiAction::Back => {
                if self.panel.is_visible() {
                    self.panel.close();
                }
            }
            UiAction::CursorUp => self.panel.cursor_up(),
            UiAction::CursorDown => self.panel.cursor_down(),
            UiAction::Activate => self.panel.activate(),
            UiAction::ValueNext => self.panel.step_value(true),
            UiAction::ValuePrevious => self.panel.step_value(false),
        }
    }

    /// Stop the main loop, saving an open panel first
    fn quit(&mut self) {
        if self.panel.is_visible() {
            self.panel.close();
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cli::Args;
    use crate::app::config::Config;
    use crate::bus::UI_SETTINGS_DIALOG;
    use crate::i18n::Language;
    use crate::panel::sort::SortKey;
    use crate::store::{SettingsStore, TomlSettingsStore, UiSettings};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        let args = Args {
            settings: Some(settings_path(dir)),
            ..Args::default()
        };
        let mut app = App::new_with_config(Config::default(), &args).unwrap();
        app.running = true;
        app
    }

    fn settings_path(dir: &TempDir) -> PathBuf {
        dir.path().join("settings.toml")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_crossterm_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_open_edit_close_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('s'));
        assert!(app.panel.is_visible());
        assert_eq!(app.open_dialogs, vec![UI_SETTINGS_DIALOG.to_string()]);

        // Dark theme off, then artist-album sort one step forward
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);

        // Nothing saved before close
        assert_eq!(app.store.ui_settings(), UiSettings::default());

        press(&mut app, KeyCode::Esc);
        assert!(!app.panel.is_visible());
        assert!(app.open_dialogs.is_empty());

        let expected = UiSettings {
            dark_ui: false,
            artist_album_sort: SortKey::YearArtistAlbum,
            ..UiSettings::default()
        };
        assert_eq!(app.store.ui_settings(), expected);

        let reloaded = TomlSettingsStore::load(settings_path(&dir)).unwrap();
        assert_eq!(reloaded.ui_settings(), expected);
    }

    #[test]
    fn test_open_key_inside_dialog_keeps_edits() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.panel.is_visible());
        assert!(!app.panel.settings().dark_ui);
        assert_eq!(app.open_dialogs, vec![UI_SETTINGS_DIALOG.to_string()]);

        press(&mut app, KeyCode::Esc);
        assert!(!app.store.dark_ui());
        let reloaded = TomlSettingsStore::load(settings_path(&dir)).unwrap();
        assert!(!reloaded.ui_settings().dark_ui);
    }

    #[test]
    fn test_close_all_dialogs() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('s'));
        app.handle_crossterm_event(Event::Key(KeyEvent::new(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        )));
        assert!(!app.panel.is_visible());
        assert!(!app.dialog_open());
        assert!(settings_path(&dir).exists());
    }

    #[test]
    fn test_dialog_keys_ignored_on_home() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(!app.panel.is_visible());
        assert_eq!(*app.panel.settings(), UiSettings::default());
        assert!(!settings_path(&dir).exists());
    }

    #[test]
    fn test_cycle_language_relabels_panel() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.catalog.language(), Language::German);
        assert_eq!(app.panel.album_sorts()[0].label, "Album");
        assert_eq!(app.panel.album_sorts()[4].label, "Jahr, Interpret, Album");
    }

    #[test]
    fn test_quit_saves_open_panel() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('q'));

        assert!(!app.running);
        assert!(!app.panel.is_visible());
        assert!(!app.store.auto_scroll_queue());
    }

    #[test]
    fn test_warning_popup_swallows_first_key() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.config_warnings = vec!["Unknown config section: [x]".to_string()];
        app.show_config_warnings_popup = true;

        press(&mut app, KeyCode::Char('s'));
        assert!(!app.show_config_warnings_popup);
        assert!(!app.panel.is_visible());

        press(&mut app, KeyCode::Char('s'));
        assert!(app.panel.is_visible());
    }

    #[test]
    fn test_key_release_ignored() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        let mut key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_crossterm_event(Event::Key(key));
        assert!(!app.panel.is_visible());
    }
}
