//! Language registry: the closed table of language codes and names.
//!
//! Translators only ever need to name three languages, so the table is
//! hardcoded rather than read from the data file. It uses a singleton with
//! `OnceLock` so every translator shares one immutable instance.

use std::sync::OnceLock;

/// A language the registry can name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "de", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "German", "English")
    pub name: &'static str,
}

/// Global language registry singleton.
///
/// Initialized on first access and immutable thereafter, so lookups are safe
/// from any thread without locking.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "de", "zh")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the code is not in the table
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language by its English name.
    ///
    /// Matching is exact: "german" does not resolve to "German".
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.name == name)
    }

    /// Get all languages, in table order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

/// Language code to name resolution used by every translator.
pub fn language_name(code: &str) -> Option<&'static str> {
    LanguageRegistry::get().get_by_code(code).map(|lang| lang.name)
}

/// Name to language code resolution used by every translator.
pub fn language_code(name: &str) -> Option<&'static str> {
    LanguageRegistry::get().get_by_name(name).map(|lang| lang.code)
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "de",
            name: "German",
        },
        LanguageConfig {
            code: "en",
            name: "English",
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
        },
    ]
}
