use crate::panel::sort::SortKey;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// The user-facing preferences edited by the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "UiSettings::default_dark_ui")]
    pub dark_ui: bool,
    #[serde(
        default = "UiSettings::default_artist_album_sort",
        deserialize_with = "lenient_artist_album_sort"
    )]
    pub artist_album_sort: SortKey,
    #[serde(
        default = "UiSettings::default_album_sort",
        deserialize_with = "lenient_album_sort"
    )]
    pub album_sort: SortKey,
    #[serde(default = "UiSettings::default_auto_scroll_queue")]
    pub auto_scroll_queue: bool,
}

impl UiSettings {
    fn default_dark_ui() -> bool {
        true
    }

    fn default_artist_album_sort() -> SortKey {
        SortKey::YearAlbum
    }

    fn default_album_sort() -> SortKey {
        SortKey::Album
    }

    fn default_auto_scroll_queue() -> bool {
        true
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dark_ui: Self::default_dark_ui(),
            artist_album_sort: Self::default_artist_album_sort(),
            album_sort: Self::default_album_sort(),
            auto_scroll_queue: Self::default_auto_scroll_queue(),
        }
    }
}

/// Unknown sort keys in a settings file fall back to the field default
/// instead of discarding the whole file
fn lenient_sort_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SortKey>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let key = SortKey::from_key(&raw);
    if key.is_none() {
        log::warn!("Unknown sort key in settings: {}", raw);
    }
    Ok(key)
}

fn lenient_artist_album_sort<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SortKey, D::Error> {
    Ok(lenient_sort_key(deserializer)?.unwrap_or_else(UiSettings::default_artist_album_sort))
}

fn lenient_album_sort<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SortKey, D::Error> {
    Ok(lenient_sort_key(deserializer)?.unwrap_or_else(UiSettings::default_album_sort))
}

/// Typed access to persisted preferences
pub trait SettingsStore {
    fn ui_settings(&self) -> UiSettings;

    /// Replace all UI preferences in one step
    fn commit_ui_settings(&mut self, settings: UiSettings);

    fn dark_ui(&self) -> bool {
        self.ui_settings().dark_ui
    }

    fn artist_album_sort(&self) -> SortKey {
        self.ui_settings().artist_album_sort
    }

    fn album_sort(&self) -> SortKey {
        self.ui_settings().album_sort
    }

    fn auto_scroll_queue(&self) -> bool {
        self.ui_settings().auto_scroll_queue
    }
}

impl<S: SettingsStore> SettingsStore for Rc<RefCell<S>> {
    fn ui_settings(&self) -> UiSettings {
        self.borrow().ui_settings()
    }

    fn commit_ui_settings(&mut self, settings: UiSettings) {
        self.borrow_mut().commit_ui_settings(settings);
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct SettingsFile {
    #[serde(default)]
    ui: UiSettings,
}

/// Preferences persisted to a TOML file, rewritten on every changed commit
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
    settings: UiSettings,
}

impl TomlSettingsStore {
    /// Returns the default settings file path:
    /// - Linux: ~/.local/share/uisettings/settings.toml
    /// - macOS: ~/Library/Application Support/uisettings/settings.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\uisettings\settings.toml
    pub fn default_path() -> color_eyre::Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine data directory"))?;
        Ok(data_dir.join("uisettings").join("settings.toml"))
    }

    /// Load the store, starting from defaults when the file is missing or unreadable as TOML
    pub fn load(path: PathBuf) -> color_eyre::Result<Self> {
        if !path.exists() {
            log::info!(
                "No settings file at {}, starting from defaults",
                path.display()
            );
            return Ok(Self {
                path,
                settings: UiSettings::default(),
            });
        }

        let contents = std::fs::read_to_string(&path)?;
        let file: SettingsFile = toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!(
                "Failed to parse settings file {}: {}, using defaults",
                path.display(),
                e
            );
            SettingsFile::default()
        });

        log::info!("Loaded settings from: {}", path.display());
        Ok(Self {
            path,
            settings: file.ui,
        })
    }

    fn save(&self) -> color_eyre::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = SettingsFile { ui: self.settings };
        let toml_string = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, toml_string)?;
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn ui_settings(&self) -> UiSettings {
        self.settings
    }

    fn commit_ui_settings(&mut self, settings: UiSettings) {
        if settings == self.settings && self.path.exists() {
            log::debug!("UI settings unchanged, skipping write");
            return;
        }
        self.settings = settings;
        match self.save() {
            Ok(()) => crate::app::logging::log_store_commit(&self.path, &settings, true, None),
            Err(e) => crate::app::logging::log_store_commit(
                &self.path,
                &settings,
                false,
                Some(&e.to_string()),
            ),
        }
    }
}

/// In-memory store recording every commit
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub settings: UiSettings,
    pub commits: Vec<UiSettings>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(settings: UiSettings) -> Self {
        Self {
            settings,
            commits: Vec::new(),
        }
    }
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn ui_settings(&self) -> UiSettings {
        self.settings
    }

    fn commit_ui_settings(&mut self, settings: UiSettings) {
        self.settings = settings;
        self.commits.push(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = UiSettings::default();
        assert!(settings.dark_ui);
        assert_eq!(settings.artist_album_sort, SortKey::YearAlbum);
        assert_eq!(settings.album_sort, SortKey::Album);
        assert!(settings.auto_scroll_queue);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::load(dir.path().join("settings.toml")).unwrap();
        assert_eq!(store.ui_settings(), UiSettings::default());
    }

    #[test]
    fn test_commit_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut store = TomlSettingsStore::load(path.clone()).unwrap();
        let edited = UiSettings {
            dark_ui: false,
            artist_album_sort: SortKey::Album,
            album_sort: SortKey::ArtFlow,
            auto_scroll_queue: true,
        };
        store.commit_ui_settings(edited);
        assert_eq!(store.ui_settings(), edited);

        let reloaded = TomlSettingsStore::load(path).unwrap();
        assert_eq!(reloaded.ui_settings(), edited);
    }

    #[test]
    fn test_unknown_sort_key_keeps_other_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[ui]\ndark_ui = false\nartist_album_sort = \"bogus\"\nalbum_sort = \"yearalbum\"\n",
        )
        .unwrap();

        let store = TomlSettingsStore::load(path).unwrap();
        let settings = store.ui_settings();
        assert!(!settings.dark_ui);
        assert_eq!(settings.artist_album_sort, SortKey::YearAlbum);
        assert_eq!(settings.album_sort, SortKey::YearAlbum);
        assert!(settings.auto_scroll_queue);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[ui\ndark_ui = ").unwrap();

        let store = TomlSettingsStore::load(path).unwrap();
        assert_eq!(store.ui_settings(), UiSettings::default());
    }

    #[test]
    fn test_shared_store_commit() {
        let shared = Rc::new(RefCell::new(MemoryStore::default()));
        let mut handle = Rc::clone(&shared);
        let edited = UiSettings {
            dark_ui: false,
            ..UiSettings::default()
        };
        handle.commit_ui_settings(edited);
        assert!(!shared.dark_ui());
        assert_eq!(shared.borrow().commits.len(), 1);
    }
}
