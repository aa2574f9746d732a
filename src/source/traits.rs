//! Trait abstraction for document loading to enable mocking in tests

use super::error::SourceError;
use async_trait::async_trait;
use std::path::Path;

/// Supplies the text of a form document chosen by the user
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Read the document at `path`
    async fn load(&self, path: &Path) -> Result<String, SourceError>;
}
