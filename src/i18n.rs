//! Display-string localization.
//!
//! Strings are looked up by their English text. A missing entry falls back
//! to the text itself, so English needs no table at all.

use std::cell::Cell;
use std::rc::Rc;

/// Localization lookup used by the UI components
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}

impl<T: Translator + ?Sized> Translator for Rc<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    German,
    French,
    Dutch,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Dutch,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Dutch => "nl",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
            Language::French => "Français",
            Language::Dutch => "Nederlands",
        }
    }

    /// Accepts plain codes as well as locale forms like "de_DE.UTF-8"
    pub fn from_code(code: &str) -> Option<Self> {
        let prefix: String = code
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == prefix)
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => &[],
            Language::German => GERMAN,
            Language::French => FRENCH,
            Language::Dutch => DUTCH,
        }
    }
}

const GERMAN: &[(&str, &str)] = &[
    ("Settings", "Einstellungen"),
    ("General", "Allgemein"),
    ("Use dark theme", "Dunkles Design verwenden"),
    ("Browse", "Durchsuchen"),
    ("Sort albums under artists by", "Alben unter Interpreten sortieren nach"),
    ("Sort album list by", "Albenliste sortieren nach"),
    ("Queue", "Warteschlange"),
    ("Auto-scroll to current track", "Automatisch zum aktuellen Titel scrollen"),
    ("Album", "Album"),
    ("Artist, Album", "Interpret, Album"),
    ("Artist, Year, Album", "Interpret, Jahr, Album"),
    ("Year, Album", "Jahr, Album"),
    ("Year, Artist, Album", "Jahr, Interpret, Album"),
    ("On", "An"),
    ("Off", "Aus"),
    ("Language", "Sprache"),
    ("Press", "Drücke"),
    ("to open settings", "um die Einstellungen zu öffnen"),
];

const FRENCH: &[(&str, &str)] = &[
    ("Settings", "Paramètres"),
    ("General", "Général"),
    ("Use dark theme", "Utiliser le thème sombre"),
    ("Browse", "Parcourir"),
    ("Sort albums under artists by", "Trier les albums des artistes par"),
    ("Sort album list by", "Trier la liste des albums par"),
    ("Queue", "File d'attente"),
    ("Auto-scroll to current track", "Défilement automatique vers la piste en cours"),
    ("Album", "Album"),
    ("Artist, Album", "Artiste, Album"),
    ("Artist, Year, Album", "Artiste, Année, Album"),
    ("Year, Album", "Année, Album"),
    ("Year, Artist, Album", "Année, Artiste, Album"),
    ("On", "Activé"),
    ("Off", "Désactivé"),
    ("Language", "Langue"),
    ("Press", "Appuyez sur"),
    ("to open settings", "pour ouvrir les paramètres"),
];

const DUTCH: &[(&str, &str)] = &[
    ("Settings", "Instellingen"),
    ("General", "Algemeen"),
    ("Use dark theme", "Donker thema gebruiken"),
    ("Browse", "Bladeren"),
    ("Sort albums under artists by", "Albums onder artiesten sorteren op"),
    ("Sort album list by", "Albumlijst sorteren op"),
    ("Queue", "Wachtrij"),
    ("Auto-scroll to current track", "Automatisch naar huidige nummer scrollen"),
    ("Album", "Album"),
    ("Artist, Album", "Artiest, Album"),
    ("Artist, Year, Album", "Artiest, Jaar, Album"),
    ("Year, Album", "Jaar, Album"),
    ("Year, Artist, Album", "Jaar, Artiest, Album"),
    ("On", "Aan"),
    ("Off", "Uit"),
    ("Language", "Taal"),
    ("Press", "Druk op"),
    ("to open settings", "om de instellingen te openen"),
];

/// Built-in string tables with a switchable active language.
///
/// The active language sits in a [`Cell`] so a single catalog can be shared
/// through an [`Rc`] between the panel and the rest of the UI.
#[derive(Debug)]
pub struct Catalog {
    language: Cell<Language>,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self {
            language: Cell::new(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch the active language, returns true if it changed
    pub fn set_language(&self, language: Language) -> bool {
        if self.language.get() == language {
            return false;
        }
        self.language.set(language);
        true
    }

    /// Advance to the next built-in language and return it
    pub fn cycle_language(&self) -> Language {
        let current = self.language.get();
        let pos = Language::ALL
            .iter()
            .position(|l| *l == current)
            .unwrap_or(0);
        let next = Language::ALL[(pos + 1) % Language::ALL.len()];
        self.set_language(next);
        next
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Translator for Catalog {
    fn translate(&self, text: &str) -> String {
        self.language
            .get()
            .table()
            .iter()
            .find(|(from, _)| *from == text)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| text.to_string())
    }
}
