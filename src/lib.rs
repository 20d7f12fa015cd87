//! Country name translations.
//!
//! Looks up what a country is called in a given language, backed either by a
//! hardcoded table ([`translator::StaticTranslator`]) or by a JSON data file
//! loaded once at startup ([`translator::JsonTranslator`]).
//!
//! ```rust
//! use country_translator::translator::{JsonTranslator, Translator};
//!
//! let translator = JsonTranslator::from_json_str(
//!     r#"[{"code":"can","name":"Canada","de":"Kanada","en":"Canada","zh":"加拿大"}]"#,
//! )?;
//! assert_eq!(translator.translate("Canada", "de"), Some("Kanada"));
//! assert_eq!(translator.translate("Canada", "fr"), None);
//! # Ok::<(), country_translator::translator::LoadError>(())
//! ```

pub mod config;
pub mod i18n;
pub mod translator;
