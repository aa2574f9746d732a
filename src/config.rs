//! Configuration handling for the TUI

use crate::state::SelectionMode;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How options of a radio field interact when toggled
    pub radio_selection: Option<SelectionMode>,
    /// Directory relative document paths are resolved against
    pub document_dir: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "xmlform", "xml-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Selection mode, falling back to the default when unset
    pub fn selection_mode(&self) -> SelectionMode {
        self.radio_selection.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.radio_selection.is_none());
        assert!(config.document_dir.is_none());
        assert_eq!(config.selection_mode(), SelectionMode::Independent);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            radio_selection: Some(SelectionMode::Exclusive),
            document_dir: Some(PathBuf::from("/srv/forms")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.radio_selection, Some(SelectionMode::Exclusive));
        assert_eq!(parsed.document_dir, Some(PathBuf::from("/srv/forms")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.radio_selection.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"radio_selection": "exclusive", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.selection_mode(), SelectionMode::Exclusive);
    }

    #[test]
    fn test_rejects_unknown_selection_mode() {
        let json = r#"{"radio_selection": "multiple"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        // Load should return default config when file doesn't exist
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
