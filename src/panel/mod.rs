//! The full-screen UI settings dialog.
//!
//! The panel keeps a local copy of the preferences while it is open and
//! writes them back to the store in a single commit when it closes. It
//! talks to the rest of the application only through the [`EventBus`],
//! [`SettingsStore`] and [`Translator`] it was constructed with.

pub mod sort;

use crate::bus::{EventBus, Notification, UI_SETTINGS_DIALOG};
use crate::i18n::Translator;
use crate::store::{SettingsStore, UiSettings};
use sort::{SortKey, SortOption, sort_options};

/// Toolbar action that opens the settings panel
pub const TB_UI_SETTINGS: &str = "tb:ui-settings";

/// Controls of the panel in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DarkUi,
    ArtistAlbumSort,
    AlbumSort,
    AutoScrollQueue,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::DarkUi,
        SettingsRow::ArtistAlbumSort,
        SettingsRow::AlbumSort,
        SettingsRow::AutoScrollQueue,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

pub struct SettingsPanel<B, S, T> {
    action_id: String,
    bus: B,
    store: S,
    translator: T,
    local: UiSettings,
    visible: bool,
    album_sorts: Vec<SortOption>,
    cursor: SettingsRow,
}

impl<B, S, T> SettingsPanel<B, S, T>
where
    B: EventBus,
    S: SettingsStore,
    T: Translator,
{
    pub fn new(action_id: impl Into<String>, bus: B, store: S, translator: T) -> Self {
        let album_sorts = sort_options(&translator);
        Self {
            action_id: action_id.into(),
            bus,
            store,
            translator,
            local: UiSettings::default(),
            visible: false,
            album_sorts,
            cursor: SettingsRow::DarkUi,
        }
    }

    /// Dispatch a bus notification, returns true if the panel acted on it
    pub fn handle(&mut self, notification: &Notification) -> bool {
        match notification {
            Notification::ToolbarAction(id) => self.on_toolbar_action(id),
            Notification::CloseDialog => {
                if self.visible {
                    self.close();
                    true
                } else {
                    false
                }
            }
            Notification::LangChanged => {
                self.init_items();
                true
            }
            Notification::Dialog { .. } => false,
        }
    }

    fn on_toolbar_action(&mut self, id: &str) -> bool {
        if id != self.action_id {
            return false;
        }
        self.bus.emit(Notification::dialog(UI_SETTINGS_DIALOG, true));
        self.local = UiSettings {
            dark_ui: self.store.dark_ui(),
            artist_album_sort: self.store.artist_album_sort(),
            album_sort: self.store.album_sort(),
            auto_scroll_queue: self.store.auto_scroll_queue(),
        };
        self.cursor = SettingsRow::DarkUi;
        self.visible = true;
        crate::app::logging::log_dialog_transition(UI_SETTINGS_DIALOG, true);
        true
    }

    /// Rebuild the sort selector entries from the active language
    fn init_items(&mut self) {
        self.album_sorts = sort_options(&self.translator);
    }

    /// Hide the panel and commit the edited preferences
    pub fn close(&mut self) {
        self.visible = false;
        self.bus.emit(Notification::dialog(UI_SETTINGS_DIALOG, false));
        self.store.commit_ui_settings(self.local);
        crate::app::logging::log_dialog_transition(UI_SETTINGS_DIALOG, false);
    }

    /// Localize a display string.
    ///
    /// Hidden panels return the text untouched; localization is only
    /// consulted once the panel has been shown.
    pub fn i18n(&self, text: &str) -> String {
        if self.visible {
            self.translator.translate(text)
        } else {
            text.to_string()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Local (possibly edited) preferences
    pub fn settings(&self) -> &UiSettings {
        &self.local
    }

    pub fn album_sorts(&self) -> &[SortOption] {
        &self.album_sorts
    }

    pub fn sort_label(&self, key: SortKey) -> &str {
        self.album_sorts
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
            .unwrap_or_else(|| key.label())
    }

    pub fn cursor(&self) -> SettingsRow {
        self.cursor
    }

    // ----- Edits (only while visible) -----

    fn editable(&self, what: &str) -> bool {
        if !self.visible {
            log::debug!("Ignoring settings edit while hidden: {}", what);
        }
        self.visible
    }

    pub fn toggle_dark_ui(&mut self) {
        if self.editable("dark_ui") {
            self.local.dark_ui = !self.local.dark_ui;
        }
    }

    pub fn toggle_auto_scroll_queue(&mut self) {
        if self.editable("auto_scroll_queue") {
            self.local.auto_scroll_queue = !self.local.auto_scroll_queue;
        }
    }

    pub fn set_artist_album_sort(&mut self, key: SortKey) {
        if self.editable("artist_album_sort") {
            self.local.artist_album_sort = key;
        }
    }

    pub fn set_album_sort(&mut self, key: SortKey) {
        if self.editable("album_sort") {
            self.local.album_sort = key;
        }
    }

    pub fn cycle_artist_album_sort(&mut self, forward: bool) {
        let next = self.local.artist_album_sort.step(forward);
        self.set_artist_album_sort(next);
    }

    pub fn cycle_album_sort(&mut self, forward: bool) {
        let next = self.local.album_sort.step(forward);
        self.set_album_sort(next);
    }

    // ----- Cursor -----

    pub fn cursor_up(&mut self) {
        let idx = self.cursor.index();
        if idx > 0 {
            self.cursor = SettingsRow::ALL[idx - 1];
        }
    }

    pub fn cursor_down(&mut self) {
        let idx = self.cursor.index();
        if idx + 1 < SettingsRow::ALL.len() {
            self.cursor = SettingsRow::ALL[idx + 1];
        }
    }

    /// Toggle the switch or advance the selector under the cursor
    pub fn activate(&mut self) {
        self.step_value(true);
    }

    /// Move the value under the cursor; switches flip either way
    pub fn step_value(&mut self, forward: bool) {
        match self.cursor {
            SettingsRow::DarkUi => self.toggle_dark_ui(),
            SettingsRow::ArtistAlbumSort => self.cycle_artist_album_sort(forward),
            SettingsRow::AlbumSort => self.cycle_album_sort(forward),
            SettingsRow::AutoScrollQueue => self.toggle_auto_scroll_queue(),
        }
    }
}
