use serde::{Deserialize, Serialize};

use crate::i18n::Translator;

/// Album sort orders offered by the browse selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Album,
    ArtistAlbum,
    ArtFlow,
    YearAlbum,
    YearArtistAlbum,
}

impl SortKey {
    /// Display order of the selector entries
    pub const ALL: [SortKey; 5] = [
        SortKey::Album,
        SortKey::ArtistAlbum,
        SortKey::ArtFlow,
        SortKey::YearAlbum,
        SortKey::YearArtistAlbum,
    ];

    /// Stable identifier, also the persisted form
    pub fn key(self) -> &'static str {
        match self {
            SortKey::Album => "album",
            SortKey::ArtistAlbum => "artistalbum",
            SortKey::ArtFlow => "artflow",
            SortKey::YearAlbum => "yearalbum",
            SortKey::YearArtistAlbum => "yearartistalbum",
        }
    }

    /// Untranslated label, used as the translation lookup key
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Album => "Album",
            SortKey::ArtistAlbum => "Artist, Album",
            SortKey::ArtFlow => "Artist, Year, Album",
            SortKey::YearAlbum => "Year, Album",
            SortKey::YearArtistAlbum => "Year, Artist, Album",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Next entry in display order, wrapping at either end
    pub fn step(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let pos = self.position();
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        Self::ALL[next]
    }
}

/// One selectable entry of a sort selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    pub key: SortKey,
    pub label: String,
}

/// Build the selector entries with labels from the active language
pub fn sort_options<T: Translator + ?Sized>(translator: &T) -> Vec<SortOption> {
    SortKey::ALL
        .iter()
        .map(|&key| SortOption {
            key,
            label: translator.translate(key.label()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Translator for Upper {
        fn translate(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_keys_in_display_order() {
        let keys: Vec<&str> = SortKey::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            ["album", "artistalbum", "artflow", "yearalbum", "yearartistalbum"]
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SortKey::from_key("artflow"), Some(SortKey::ArtFlow));
        assert_eq!(SortKey::from_key("ArtFlow"), None);
        assert_eq!(SortKey::from_key(""), None);
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(SortKey::Album.step(true), SortKey::ArtistAlbum);
        assert_eq!(SortKey::YearArtistAlbum.step(true), SortKey::Album);
        assert_eq!(SortKey::Album.step(false), SortKey::YearArtistAlbum);
    }

    #[test]
    fn test_sort_options_translated() {
        let options = sort_options(&Upper);
        assert_eq!(options.len(), 5);
        assert_eq!(options[2].key, SortKey::ArtFlow);
        assert_eq!(options[2].label, "ARTIST, YEAR, ALBUM");
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            sort: SortKey,
        }

        let text = toml::to_string(&Wrapper {
            sort: SortKey::YearArtistAlbum,
        })
        .unwrap();
        assert_eq!(text.trim(), "sort = \"yearartistalbum\"");

        let parsed: Wrapper = toml::from_str("sort = \"artistalbum\"").unwrap();
        assert_eq!(parsed.sort, SortKey::ArtistAlbum);
    }
}
