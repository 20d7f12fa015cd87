//! Translator backed by a JSON data file.
//!
//! The data file is an array of country records:
//!
//! ```json
//! [{ "code": "can", "name": "Canada", "de": "Kanada", "en": "Canada", "zh": "加拿大" }]
//! ```
//!
//! Every key other than `code` and `name` is a language code. The file is
//! read once at construction; all queries are served from memory.

use super::{LoadError, Translator};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const CODE_KEY: &str = "code";
const NAME_KEY: &str = "name";

/// Dataset shipped with the crate, used when no data file is configured.
const BUNDLED_DATA: &str = include_str!("../../data/sample.json");

/// One country's entry in the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    /// Language code → the country's name in that language
    pub translations: BTreeMap<String, String>,
}

impl CountryRecord {
    /// Extract a record from one element of the data array.
    ///
    /// Returns `None` (after logging) when the element is not an object or is
    /// missing a string `code` or `name`. Language entries with non-string
    /// values are dropped individually.
    fn from_value(index: usize, value: &Value) -> Option<Self> {
        let Some(object) = value.as_object() else {
            warn!(index, "Skipping country record: expected an object");
            return None;
        };

        let (Some(code), Some(name)) = (string_field(object, CODE_KEY), string_field(object, NAME_KEY))
        else {
            warn!(index, "Skipping country record: missing 'code' or 'name' field");
            return None;
        };

        let mut translations = BTreeMap::new();
        for (key, value) in object {
            if key == CODE_KEY || key == NAME_KEY {
                continue;
            }
            match value.as_str() {
                Some(translated) => {
                    translations.insert(key.clone(), translated.to_string());
                }
                None => warn!(
                    index,
                    country = code,
                    language = key.as_str(),
                    "Skipping translation: value is not a string"
                ),
            }
        }

        Some(Self {
            code: code.to_string(),
            name: name.to_string(),
            translations,
        })
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A translator whose data was loaded from JSON.
///
/// Both indexes are keyed by country code and populated together, so a code
/// is present in one exactly when it is present in the other. Iteration
/// follows country code order.
#[derive(Debug, Clone, Default)]
pub struct JsonTranslator {
    /// Country code → country name
    country_names: BTreeMap<String, String>,

    /// Country code → (language code → translated name)
    translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl JsonTranslator {
    /// Load the dataset embedded in the crate.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json_str(BUNDLED_DATA)
    }

    /// Load a data file from disk.
    ///
    /// Fails if the file cannot be read or is not a JSON array. Malformed
    /// records inside a valid array are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loading translation data from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Load from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_str(json)?;

        let entries = match document {
            Value::Array(entries) => entries,
            other => {
                return Err(LoadError::NotAnArray {
                    found: json_kind(&other),
                })
            }
        };

        let records: Vec<CountryRecord> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, value)| CountryRecord::from_value(index, value))
            .collect();

        let skipped = entries.len() - records.len();
        let translator = Self::from_records(records);

        info!(
            "Loaded {} countries ({} records skipped)",
            translator.len(),
            skipped
        );
        Ok(translator)
    }

    /// Build the indexes from already-parsed records.
    ///
    /// Records are applied in order; a repeated country code replaces the
    /// earlier entry.
    pub fn from_records(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        let mut translator = Self::default();

        for record in records {
            debug!(
                code = record.code.as_str(),
                languages = record.translations.len(),
                "Indexed country {}",
                record.name
            );
            translator
                .country_names
                .insert(record.code.clone(), record.name);
            translator
                .translations
                .insert(record.code, record.translations);
        }

        translator
    }

    /// Number of countries loaded.
    pub fn len(&self) -> usize {
        self.country_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.country_names.is_empty()
    }

    fn languages_for(&self, country: &str) -> Option<&BTreeMap<String, String>> {
        let code = self.from_country(country)?;
        self.translations.get(code)
    }
}

impl Translator for JsonTranslator {
    fn country_languages(&self, country: &str) -> Vec<&str> {
        self.languages_for(country)
            .map(|languages| languages.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn countries(&self) -> Vec<&str> {
        self.country_names.values().map(String::as_str).collect()
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.languages_for(country)?
            .get(language)
            .map(String::as_str)
    }

    fn from_country_code(&self, code: &str) -> Option<&str> {
        self.country_names.get(code).map(String::as_str)
    }

    // No reverse index: a scan is fine for a few hundred countries. With
    // duplicate names the lowest code wins.
    fn from_country(&self, country: &str) -> Option<&str> {
        self.country_names
            .iter()
            .find(|(_, name)| name.as_str() == country)
            .map(|(code, _)| code.as_str())
    }
}
