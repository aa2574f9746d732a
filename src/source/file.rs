//! Filesystem-backed document source

use super::error::SourceError;
use super::traits::DocumentSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Extensions accepted by the file picker
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xml", "txt"];

/// Reads documents from disk, resolving relative paths against a base directory
#[derive(Debug, Clone, Default)]
pub struct FileDocumentSource {
    base_dir: Option<PathBuf>,
}

impl FileDocumentSource {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Path that will actually be read for `path`
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Check the extension filter. Content is not inspected.
pub fn check_extension(path: &Path) -> Result<(), SourceError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(SourceError::UnsupportedExtension(path.display().to_string()))
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn load(&self, path: &Path) -> Result<String, SourceError> {
        let path = self.resolve(path);
        check_extension(&path)?;
        tracing::info!("Reading form document from {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SourceError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod extension_filter {
        use super::*;

        #[test]
        fn test_accepts_xml_and_txt() {
            assert!(check_extension(Path::new("form.xml")).is_ok());
            assert!(check_extension(Path::new("form.txt")).is_ok());
        }

        #[test]
        fn test_accepts_uppercase_extension() {
            assert!(check_extension(Path::new("FORM.XML")).is_ok());
        }

        #[test]
        fn test_rejects_other_extensions() {
            assert!(matches!(
                check_extension(Path::new("form.json")),
                Err(SourceError::UnsupportedExtension(_))
            ));
            assert!(check_extension(Path::new("form")).is_err());
        }
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let source = FileDocumentSource::new(Some(PathBuf::from("/forms")));
        assert_eq!(
            source.resolve(Path::new("a.xml")),
            PathBuf::from("/forms/a.xml")
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        let source = FileDocumentSource::new(Some(PathBuf::from("/forms")));
        assert_eq!(
            source.resolve(Path::new("/tmp/a.xml")),
            PathBuf::from("/tmp/a.xml")
        );
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("xml-form-tui-{}.xml", std::process::id()));
        std::fs::write(&path, "<form/>").unwrap();
        let source = FileDocumentSource::default();
        let text = tokio_test::block_on(source.load(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "<form/>");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let source = FileDocumentSource::default();
        let result = tokio_test::block_on(source.load(Path::new("/definitely/not/here.xml")));
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_load_rejects_extension_before_reading() {
        let source = FileDocumentSource::default();
        let result = tokio_test::block_on(source.load(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(SourceError::UnsupportedExtension(_))));
    }
}
