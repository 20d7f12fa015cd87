use crate::translator::TranslatorBackend;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub backend: TranslatorBackend,

    /// JSON data file; `None` means the bundled dataset
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("TRANSLATOR_BACKEND") {
            Ok(value) => TranslatorBackend::from_name(&value).context("Invalid TRANSLATOR_BACKEND")?,
            Err(_) => TranslatorBackend::default(),
        };

        Ok(Self {
            backend,
            data_file: std::env::var("TRANSLATOR_DATA_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
