//! Names of the languages themselves.
//!
//! Country names come from translator data, but the names of languages
//! ("de" → "German") come from a small closed table shared by every
//! translator. See [`LanguageRegistry`].
//!
//! # Example
//!
//! ```rust
//! use country_translator::i18n::{language_code, language_name};
//!
//! assert_eq!(language_name("zh"), Some("Chinese"));
//! assert_eq!(language_code("German"), Some("de"));
//! assert_eq!(language_name("fr"), None);
//! ```

mod registry;

pub use registry::{language_code, language_name, LanguageConfig, LanguageRegistry};
