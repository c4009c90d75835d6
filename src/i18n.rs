//! # Localization
//!
//! Language selection, translation tables and the persisted language
//! preference.

pub mod language;
pub mod preferences;
pub mod translations;

pub use language::{Language, UnknownLanguage};
pub use preferences::{IniPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use translations::{translations, Translations};

use anyhow::Result;

/// Key the chosen language is stored under
pub const LANGUAGE_KEY: &str = "pokedex-language";

/// Current UI language backed by an injected preference store
pub struct LanguageSettings<S: PreferenceStore> {
    store: S,
    language: Language,
}

impl<S: PreferenceStore> LanguageSettings<S> {
    /// Restore the stored language, or use `fallback` when none is stored or
    /// the stored value is unusable
    pub fn load(store: S, fallback: Language) -> Self {
        let language = match store.read(LANGUAGE_KEY) {
            Ok(Some(code)) => code.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored language: {}", e);
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!("Failed to read language preference: {}", e);
                fallback
            }
        };
        tracing::debug!("UI language: {}", language);
        Self { store, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translations(&self) -> &'static Translations {
        translations(self.language)
    }

    /// Use `language` for this session without persisting it
    pub fn set_session_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch language and persist the choice
    pub fn change_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        self.store.write(LANGUAGE_KEY, language.code())?;
        tracing::info!("Language changed to {}", language);
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_should_use_fallback_without_stored_value() {
        let settings = LanguageSettings::load(MemoryPreferenceStore::new(), Language::En);
        assert_eq!(settings.language(), Language::En);
    }

    #[test]
    fn load_should_restore_stored_language() {
        let mut store = MemoryPreferenceStore::new();
        store.write(LANGUAGE_KEY, "en").unwrap();
        let settings = LanguageSettings::load(store, Language::Fr);
        assert_eq!(settings.language(), Language::En);
        assert_eq!(settings.translations().speed, "Speed");
    }

    #[test]
    fn load_should_ignore_unknown_codes() {
        let mut store = MemoryPreferenceStore::new();
        store.write(LANGUAGE_KEY, "klingon").unwrap();
        let settings = LanguageSettings::load(store, Language::Fr);
        assert_eq!(settings.language(), Language::Fr);
    }

    #[test]
    fn change_language_should_persist() {
        let mut settings = LanguageSettings::load(MemoryPreferenceStore::new(), Language::Fr);
        settings.change_language(Language::En).unwrap();
        assert_eq!(settings.language(), Language::En);
        assert_eq!(
            settings.store().read(LANGUAGE_KEY).unwrap(),
            Some("en".to_string())
        );
    }

    #[test]
    fn session_language_should_not_persist() {
        let mut settings = LanguageSettings::load(MemoryPreferenceStore::new(), Language::Fr);
        settings.set_session_language(Language::En);
        assert_eq!(settings.language(), Language::En);
        assert_eq!(settings.store().read(LANGUAGE_KEY).unwrap(), None);
    }
}
