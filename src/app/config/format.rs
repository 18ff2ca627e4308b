use crate::app::config::binds::BindsConfig;
use crate::app::config::colors::ColorsConfig;
use crate::app::config::i18n::I18nConfig;
use crate::app::config::logging::LoggingConfig;
use crate::app::config::store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub binds: BindsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const KNOWN_SECTIONS: &[&str] = &["i18n", "store", "colors", "binds", "logging"];

const PALETTE_FIELDS: &[&str] = &[
    "background",
    "text",
    "muted",
    "border",
    "toolbar",
    "toolbar_text",
    "header",
    "highlight",
    "highlight_text",
    "switch_on",
    "switch_off",
];

/// Known keys per table, addressed by dotted path
const KNOWN_FIELDS: &[(&str, &[&str])] = &[
    ("i18n", &["language"]),
    ("store", &["path"]),
    ("colors", &["dark", "light"]),
    ("colors.dark", PALETTE_FIELDS),
    ("colors.light", PALETTE_FIELDS),
    (
        "binds",
        &[
            "open_settings",
            "close_all_dialogs",
            "cycle_language",
            "quit",
            "back",
            "cursor_up",
            "cursor_down",
            "activate",
            "value_next",
            "value_previous",
        ],
    ),
    (
        "logging",
        &[
            "enabled",
            "level",
            "log_to_console",
            "append_to_file",
            "rotate_logs",
            "rotation_size_mb",
            "keep_log_files",
        ],
    ),
];

/// Edit distance between two strings, two-row variant
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest candidate within a length-scaled edit distance
fn find_similar(unknown: &str, candidates: &[&str]) -> Option<String> {
    let unknown_lower = unknown.to_lowercase();
    candidates
        .iter()
        .map(|c| (c, levenshtein_distance(&unknown_lower, &c.to_lowercase())))
        .filter(|(c, d)| *d <= (unknown.len().max(c.len()) / 2).max(3))
        .min_by_key(|(_, d)| *d)
        .map(|(c, _)| c.to_string())
}

fn unknown_warning(section: Option<&str>, key: &str, suggestion: Option<String>) -> String {
    let hint = suggestion
        .map(|s| match section {
            None => format!(" (did you mean: [{}]?)", s),
            Some(_) => format!(" (did you mean: {}?)", s),
        })
        .unwrap_or_default();
    match section {
        None => format!("Unknown config section: [{}]{}", key, hint),
        Some(section) => format!("Unknown option in [{}]: {}{}", section, key, hint),
    }
}

impl Config {
    /// Returns the default config file path based on the platform:
    /// - Linux: ~/.config/uisettings/config.toml (XDG_CONFIG_HOME)
    /// - macOS: ~/Library/Application Support/uisettings/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\uisettings\config.toml
    pub fn default_config_path() -> color_eyre::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(config_dir.join("uisettings").join("config.toml"))
    }

    /// Load the config, writing a default one if none exists.
    /// Also returns warnings about unknown keys.
    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<(Self, Vec<String>)> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let default_config = Config::default();
            std::fs::write(&config_path, toml::to_string_pretty(&default_config)?)?;
            return Ok((default_config, Vec::new()));
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let mut warnings = Self::check_unknown_fields(&contents);

        let config = toml::from_str(&contents).unwrap_or_else(|e| {
            warnings.push(format!("Failed to parse config file, using defaults: {}", e));
            Config::default()
        });
        Ok((config, warnings))
    }

    fn check_unknown_fields(contents: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let Ok(table) = toml::from_str::<toml::Table>(contents) else {
            // Syntax errors are reported by the typed parse
            return warnings;
        };

        for key in table.keys() {
            if !KNOWN_SECTIONS.contains(&key.as_str()) {
                let suggestion = find_similar(key, KNOWN_SECTIONS);
                warnings.push(unknown_warning(None, key, suggestion));
            }
        }

        for (path, fields) in KNOWN_FIELDS {
            let Some(section) = lookup_table(&table, path) else {
                continue;
            };
            for key in section.keys() {
                if !fields.contains(&key.as_str()) {
                    let suggestion = find_similar(key, fields);
                    warnings.push(unknown_warning(Some(*path), key, suggestion));
                }
            }
        }

        warnings
    }

    /// Generate a default config file at the specified path
    pub fn generate_default(path: PathBuf) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(color_eyre::eyre::eyre!(
                "Config file already exists at: {}",
                path.display()
            ));
        }

        std::fs::write(&path, toml::to_string_pretty(&Config::default())?)?;
        println!("Generated default config at: {}", path.display());
        Ok(())
    }
}

fn lookup_table<'a>(root: &'a toml::Table, path: &str) -> Option<&'a toml::Table> {
    path.split('.').try_fold(root, |table, part| match table.get(part) {
        Some(toml::Value::Table(t)) => Some(t),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_unknown_section_with_suggestion() {
        let warnings = Config::check_unknown_fields("[colours]\n");
        assert_eq!(
            warnings,
            vec!["Unknown config section: [colours] (did you mean: [colors]?)".to_string()]
        );
    }

    #[test]
    fn test_unknown_nested_option() {
        let warnings = Config::check_unknown_fields(
            "[colors.dark]\nhighlite = \"#ffffff\"\n\n[i18n]\nlanguage = \"de\"\n",
        );
        assert_eq!(
            warnings,
            vec!["Unknown option in [colors.dark]: highlite (did you mean: highlight?)".to_string()]
        );
    }

    #[test]
    fn test_known_fields_produce_no_warnings() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(Config::check_unknown_fields(&text).is_empty());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let (config, warnings) = Config::load(Some(path.clone())).unwrap();
        assert!(path.exists());
        assert!(warnings.is_empty());
        assert_eq!(config.i18n.language, "en");
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[i18n]\nlanguage = \"fr\"\n\n[binds]\nquit = [\"x\"]\n").unwrap();

        let (config, warnings) = Config::load(Some(path)).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.i18n.language, "fr");
        assert_eq!(config.binds.quit, vec!["x".to_string()]);
        assert_eq!(config.binds.back, vec!["esc".to_string(), "backspace".to_string()]);
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_load_invalid_types_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nenabled = \"yes\"\n").unwrap();

        let (config, warnings) = Config::load(Some(path)).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse config file"));
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_generate_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Config::generate_default(path.clone()).unwrap();
        assert!(Config::generate_default(path).is_err());
    }
}
