//! Hardcoded single-country translator.

use super::Translator;

/// Country code of the only country the static table knows.
pub const CANADA_CODE: &str = "can";

/// Display name of the only country the static table knows.
pub const CANADA_NAME: &str = "Canada";

/// Language code → translated name of Canada, in language code order.
const CANADA_TRANSLATIONS: &[(&str, &str)] = &[("de", "Kanada"), ("en", "Canada"), ("zh", "加拿大")];

/// A translator backed by a fixed table for Canada.
///
/// Needs no data file and cannot fail to construct. Useful as a fallback and
/// for exercising code that consumes a [`Translator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTranslator;

impl StaticTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Translator for StaticTranslator {
    fn country_languages(&self, country: &str) -> Vec<&str> {
        if country != CANADA_NAME {
            return Vec::new();
        }
        CANADA_TRANSLATIONS.iter().map(|(code, _)| *code).collect()
    }

    fn countries(&self) -> Vec<&str> {
        vec![CANADA_NAME]
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        if country != CANADA_NAME {
            return None;
        }
        CANADA_TRANSLATIONS
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, translated)| *translated)
    }

    fn from_country_code(&self, code: &str) -> Option<&str> {
        (code == CANADA_CODE).then_some(CANADA_NAME)
    }

    fn from_country(&self, country: &str) -> Option<&str> {
        (country == CANADA_NAME).then_some(CANADA_CODE)
    }
}
