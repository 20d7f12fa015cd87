//! Country name translators.
//!
//! A [`Translator`] answers questions about a fixed set of countries: which
//! countries it knows, which languages each country has a translated name
//! for, and what that name is. Two implementations exist:
//!
//! - [`StaticTranslator`]: a hardcoded single-country table
//! - [`JsonTranslator`]: indexes loaded once from a JSON data file
//!
//! Callers should depend on the trait (usually as `Box<dyn Translator>` from
//! [`build_translator`]) rather than a concrete type.

mod backend;
mod error;
mod json;
mod static_table;

pub use backend::{build_translator, TranslatorBackend};
pub use error::LoadError;
pub use json::{CountryRecord, JsonTranslator};
pub use static_table::StaticTranslator;

use crate::i18n;

/// Lookup operations shared by every translator.
///
/// Country-facing operations take the country's display *name* (e.g.
/// "Canada"), not its code. Missing data is `None` or an empty list, never an
/// error. Implementations are immutable after construction, so a translator
/// can be shared across threads freely.
#[allow(clippy::wrong_self_convention)]
pub trait Translator: Send + Sync {
    /// Language codes that have a translation for the named country.
    ///
    /// Empty if the country is unknown.
    fn country_languages(&self, country: &str) -> Vec<&str>;

    /// Names of every country this translator knows.
    fn countries(&self) -> Vec<&str>;

    /// The country's name rendered in `language`.
    ///
    /// `None` if the country name is unknown or no translation is recorded
    /// for that language.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;

    /// Country name for a country code (e.g., "can" → "Canada").
    fn from_country_code(&self, code: &str) -> Option<&str>;

    /// Country code for a country name (e.g., "Canada" → "can").
    fn from_country(&self, country: &str) -> Option<&str>;

    /// Language name for a language code (e.g., "de" → "German").
    fn from_language_code(&self, code: &str) -> Option<&str> {
        i18n::language_name(code)
    }

    /// Language code for a language name (e.g., "German" → "de").
    fn from_language(&self, language: &str) -> Option<&str> {
        i18n::language_code(language)
    }
}
