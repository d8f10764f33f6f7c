//! Application configuration, loaded from an optional TOML file.

use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub translate: TranslateConfig,

    #[serde(default)]
    pub library: LibraryConfig,
}

/// Where the external translation view points.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub base_url: String,
    /// Target language code passed as `tl`
    pub target_lang: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com".to_string(),
            target_lang: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Overrides the per-user data directory location
    pub path: Option<PathBuf>,
}

impl LibraryConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_library_path)
    }
}

pub fn default_library_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("lipi-lens");
    path.push("library.bin");
    path
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [translate]
            target_lang = "fr"

            [library]
            path = "/tmp/lib.bin"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.translate.target_lang, "fr");
        assert_eq!(cfg.translate.base_url, "https://translate.google.com");
        assert_eq!(cfg.library.resolved_path(), PathBuf::from("/tmp/lib.bin"));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("translate = 3").unwrap_err();
        assert!(matches!(err, crate::error::LipiError::Config(_)));
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn default_library_path_ends_with_file_name() {
        assert!(default_library_path().ends_with("lipi-lens/library.bin"));
    }
}
