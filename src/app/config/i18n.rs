use crate::i18n::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Display language code (en, de, fr, nl)
    #[serde(default = "I18nConfig::default_language")]
    pub language: String,
}

impl I18nConfig {
    fn default_language() -> String {
        "en".to_string()
    }

    /// Resolve the configured code, falling back to English
    pub fn resolve(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!(
                "Unsupported language '{}', falling back to English",
                self.language
            );
            Language::English
        })
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Self::default_language(),
        }
    }
}
