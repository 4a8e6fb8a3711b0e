//! Configuration handling for the TUI

use crate::state::ValidationMode;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Show the success overlay before anything was submitted
    pub show_confirmation_on_start: Option<bool>,
    /// Draw the password in clear text
    pub reveal_password: Option<bool>,
    /// Trigger policy before the first submit attempt
    pub validation_mode: Option<ValidationMode>,
    /// Trigger policy after a failed submit attempt
    pub revalidate_mode: Option<ValidationMode>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "auth-form", "auth-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("auth-form-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn show_confirmation_on_start(&self) -> bool {
        self.show_confirmation_on_start.unwrap_or(true)
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode.unwrap_or(ValidationMode::OnBlur)
    }

    pub fn revalidate_mode(&self) -> ValidationMode {
        self.revalidate_mode.unwrap_or(ValidationMode::OnChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.show_confirmation_on_start.is_none());
        assert!(config.reveal_password.is_none());
        assert!(config.validation_mode.is_none());
        assert!(config.revalidate_mode.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = AppConfig::default();
        assert!(config.show_confirmation_on_start());
        assert_eq!(config.validation_mode(), ValidationMode::OnBlur);
        assert_eq!(config.revalidate_mode(), ValidationMode::OnChange);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            show_confirmation_on_start: Some(false),
            reveal_password: Some(true),
            validation_mode: Some(ValidationMode::OnChange),
            revalidate_mode: Some(ValidationMode::OnBlur),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.show_confirmation_on_start, Some(false));
        assert_eq!(parsed.reveal_password, Some(true));
        assert_eq!(parsed.validation_mode, Some(ValidationMode::OnChange));
        assert_eq!(parsed.revalidate_mode, Some(ValidationMode::OnBlur));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.show_confirmation_on_start.is_none());
        assert!(parsed.show_confirmation_on_start());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"validation_mode": "on_submit", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.validation_mode(), ValidationMode::OnSubmit);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let json = r#"{"validation_mode": "on_hover"}"#;
        assert!(serde_json::from_str::<AppConfig>(json).is_err());
    }

    #[test]
    fn test_load_returns_ok() {
        // Load falls back to defaults when no config file exists
        let result = AppConfig::load();
        assert!(result.is_ok());
    }

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "auth-form-tui-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("auth-form-tui-does-not-exist.json");
        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.show_confirmation_on_start());
    }

    #[test]
    fn test_load_from_reads_file() {
        let path = scratch_file("valid", r#"{"show_confirmation_on_start": false}"#);
        let config = AppConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.show_confirmation_on_start());
    }

    #[test]
    fn test_load_from_malformed_file_is_an_error() {
        let path = scratch_file("malformed", "{ not json");
        let err = AppConfig::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn test_log_path_is_inside_data_dir() {
        if let Some(path) = AppConfig::log_path() {
            assert!(path.ends_with("auth-form-tui.log"));
        }
    }
}
