//! Integration tests for country-translator
//!
//! These tests exercise the public API end to end: loading data files from
//! disk, building translators from configuration, and checking the lookup
//! contract that every translator shares.

use country_translator::config::Config;
use country_translator::translator::{
    build_translator, JsonTranslator, LoadError, StaticTranslator, Translator, TranslatorBackend,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Write `contents` to a data file inside `temp_dir`
fn write_data_file(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("countries.json");
    std::fs::write(&path, contents).expect("Failed to write data file");
    path
}

const NORTH_AMERICA: &str = r#"[
    {"code":"can","name":"Canada","de":"Kanada","en":"Canada","zh":"加拿大"},
    {"code":"mex","name":"Mexico","de":"Mexiko","en":"Mexico","es":"México"},
    {"code":"usa","name":"United States","en":"United States","zh":"美国"}
]"#;

// ==================== File Loading Tests ====================

#[test]
fn test_load_canada_example() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_data_file(
        &temp_dir,
        r#"[{"code":"can","name":"Canada","de":"Kanada","en":"Canada","zh":"加拿大"}]"#,
    );

    let translator = JsonTranslator::from_file(&path).expect("Should load");

    assert_eq!(translator.countries(), vec!["Canada"]);
    assert_eq!(translator.translate("Canada", "de"), Some("Kanada"));
    assert_eq!(translator.translate("Canada", "fr"), None);
    assert!(translator.country_languages("Mexico").is_empty());
}

#[test]
fn test_malformed_record_does_not_abort_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_data_file(
        &temp_dir,
        r#"[
            {"name":"Nowhere","en":"Nowhere"},
            {"code":"can","name":"Canada","de":"Kanada"},
            {"code":"mex"},
            {"code":"usa","name":"United States","en":"United States"}
        ]"#,
    );

    let translator = JsonTranslator::from_file(&path).expect("Load should succeed");

    assert_eq!(translator.countries(), vec!["Canada", "United States"]);
    assert_eq!(translator.translate("Canada", "de"), Some("Kanada"));
    assert_eq!(translator.from_country_code("mex"), None);
}

#[test]
fn test_unparsable_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_data_file(&temp_dir, "this is not json");

    let result = JsonTranslator::from_file(&path);
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn test_non_array_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_data_file(&temp_dir, r#"{"countries":[]}"#);

    let result = JsonTranslator::from_file(&path);
    assert!(matches!(result, Err(LoadError::NotAnArray { .. })));
}

#[test]
fn test_missing_file_fails_with_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.json");

    let err = JsonTranslator::from_file(&path).expect_err("Should fail");
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

// ==================== Query Contract Tests ====================

#[test]
fn test_translate_absent_when_language_not_listed() {
    let translator = JsonTranslator::from_json_str(NORTH_AMERICA).expect("Should load");

    for country in translator.countries() {
        let languages = translator.country_languages(country);
        for language in ["de", "en", "es", "zh", "fr"] {
            let translated = translator.translate(country, language);
            assert_eq!(
                translated.is_some(),
                languages.contains(&language),
                "{} / {}",
                country,
                language
            );
        }
    }
}

#[test]
fn test_country_code_round_trip_for_every_country() {
    let translator = JsonTranslator::from_json_str(NORTH_AMERICA).expect("Should load");

    for country in translator.countries() {
        let code = translator.from_country(country).expect("Known country has a code");
        assert_eq!(translator.from_country_code(code), Some(country));
    }
}

#[test]
fn test_language_table_is_closed() {
    let translator = JsonTranslator::from_json_str(NORTH_AMERICA).expect("Should load");

    // "es" has translations in the data but no entry in the language table
    assert_eq!(translator.translate("Mexico", "es"), Some("México"));
    assert_eq!(translator.from_language_code("es"), None);
    assert_eq!(translator.from_language("Spanish"), None);
}

// ==================== Configuration Tests ====================

#[test]
fn test_build_translator_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_data_file(&temp_dir, NORTH_AMERICA);

    let config = Config {
        backend: TranslatorBackend::Json,
        data_file: Some(path),
    };
    let translator = build_translator(&config).expect("Should build");

    assert_eq!(translator.countries(), vec!["Canada", "Mexico", "United States"]);
    assert_eq!(translator.translate("United States", "zh"), Some("美国"));
}

#[test]
fn test_build_translator_propagates_load_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_data_file(&temp_dir, "[");

    let config = Config {
        backend: TranslatorBackend::Json,
        data_file: Some(path),
    };
    assert!(build_translator(&config).is_err());
}

#[test]
fn test_static_and_bundled_agree_on_canada() {
    let bundled = JsonTranslator::bundled().expect("Should load");
    let fixed = StaticTranslator::new();

    for language in fixed.country_languages("Canada") {
        assert_eq!(
            bundled.translate("Canada", language),
            fixed.translate("Canada", language)
        );
    }
}

// ==================== Property Tests ====================

/// Records with unique codes and unique names
fn unique_records() -> impl Strategy<Value = Vec<(String, String, BTreeMap<String, String>)>> {
    prop::collection::btree_map(
        "[a-z]{3}",
        prop::collection::btree_map("[a-z]{2}", "[A-Za-z ]{1,12}", 0..4),
        0..12,
    )
    .prop_map(|by_code| {
        by_code
            .into_iter()
            .map(|(code, translations)| {
                let name = format!("Country {}", code.to_uppercase());
                (code, name, translations)
            })
            .collect()
    })
}

fn to_json(records: &[(String, String, BTreeMap<String, String>)]) -> String {
    let array: Vec<serde_json::Value> = records
        .iter()
        .map(|(code, name, translations)| {
            let mut object = serde_json::Map::new();
            // Two-letter language keys never collide with "code" or "name"
            for (language, translated) in translations {
                object.insert(language.clone(), translated.clone().into());
            }
            object.insert("code".to_string(), code.clone().into());
            object.insert("name".to_string(), name.clone().into());
            serde_json::Value::Object(object)
        })
        .collect();
    serde_json::Value::Array(array).to_string()
}

proptest! {
    #[test]
    fn prop_loaded_records_round_trip(records in unique_records()) {
        let translator = JsonTranslator::from_json_str(&to_json(&records)).expect("Should load");

        prop_assert_eq!(translator.len(), records.len());

        for (code, name, translations) in &records {
            prop_assert_eq!(translator.from_country_code(code), Some(name.as_str()));
            prop_assert_eq!(translator.from_country(name), Some(code.as_str()));

            let languages = translator.country_languages(name);
            prop_assert_eq!(languages.len(), translations.len());
            for (language, translated) in translations {
                prop_assert_eq!(translator.translate(name, language), Some(translated.as_str()));
            }
        }
    }

    #[test]
    fn prop_unknown_country_has_no_languages(name in "[a-z]{1,10}") {
        // Generated names are lowercase; every name in the data is capitalized
        let translator = JsonTranslator::from_json_str(NORTH_AMERICA).expect("Should load");
        prop_assert!(translator.country_languages(&name).is_empty());
        prop_assert_eq!(translator.translate(&name, "en"), None);
    }
}
