use super::{JsonTranslator, StaticTranslator, Translator};
use crate::config::Config;
use anyhow::{bail, Context, Result};
use tracing::info;

/// Which translator implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslatorBackend {
    /// Hardcoded single-country table
    Static,
    /// JSON data file (or the bundled dataset)
    #[default]
    Json,
}

impl TranslatorBackend {
    /// Parse a backend name as written in configuration.
    ///
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn from_name(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "static" | "hardcoded" => Ok(TranslatorBackend::Static),
            "json" | "file" => Ok(TranslatorBackend::Json),
            other => bail!("Unknown translator backend: '{}' (expected 'json' or 'static')", other),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TranslatorBackend::Static => "static",
            TranslatorBackend::Json => "json",
        }
    }
}

/// Construct the translator described by `config`.
///
/// The JSON backend reads `config.data_file` when set and the bundled dataset
/// otherwise. Load failures are returned, never replaced by an empty
/// translator.
pub fn build_translator(config: &Config) -> Result<Box<dyn Translator>> {
    info!("Using {} translator backend", config.backend.name());

    match config.backend {
        TranslatorBackend::Static => Ok(Box::new(StaticTranslator::new())),
        TranslatorBackend::Json => {
            let translator = match &config.data_file {
                Some(path) => JsonTranslator::from_file(path).with_context(|| {
                    format!("Failed to load translation data from {}", path.display())
                })?,
                None => JsonTranslator::bundled().context("Failed to load bundled translation data")?,
            };
            Ok(Box::new(translator))
        }
    }
}
