use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain document text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unsupported file type \"{0}\" (expected .xml or .txt)")]
    UnsupportedExtension(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
