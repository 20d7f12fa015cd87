use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a [`JsonTranslator`](super::JsonTranslator).
///
/// Only whole-source problems are errors. Individual malformed records are
/// skipped during load and never surface here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read translation data from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("translation data is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("translation data must be a JSON array of country records, found {found}")]
    NotAnArray { found: &'static str },
}
