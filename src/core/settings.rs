//! User settings
//!
//! Reads optional defaults from `config.toml` in the config directory.
//! Command-line flags take precedence over these, and these over the
//! built-in defaults.
//!
//! ```toml
//! [platform]
//! dir = "/opt/platforms/ticc13x0"
//!
//! [packages]
//! dir = "/opt/packages"
//!
//! [upload]
//! protocol = "jlink"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infra::dirs::PlatformDirs;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read settings file '{path}': {error}")]
    Read { path: String, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse settings file '{path}': {error}")]
    Parse { path: String, error: String },
}

/// User settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub platform: PlatformSettings,

    #[serde(default)]
    pub packages: PackagesSettings,

    #[serde(default)]
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlatformSettings {
    /// Directory holding `platform.json` and `boards/`
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackagesSettings {
    /// Installed packages directory
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadSettings {
    /// Upload protocol used when a command does not name one
    pub protocol: Option<String>,
}

impl Settings {
    /// Load settings from the config directory
    pub fn load(dirs: &PlatformDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.settings_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults; an unparsable one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective platform directory, current directory by default
    #[must_use]
    pub fn platform_dir(&self) -> PathBuf {
        self.platform
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Effective installed packages directory
    #[must_use]
    pub fn packages_dir(&self, dirs: &PlatformDirs) -> PathBuf {
        self.packages
            .dir
            .clone()
            .unwrap_or_else(|| dirs.packages_dir())
    }

    /// Default upload protocol, if configured
    #[must_use]
    pub fn upload_protocol(&self) -> Option<&str> {
        self.upload.protocol.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.platform.dir.is_none());
        assert!(settings.packages.dir.is_none());
        assert!(settings.upload_protocol().is_none());
        assert_eq!(settings.platform_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[platform]
dir = "/opt/ticc13x0"

[packages]
dir = "/opt/packages"

[upload]
protocol = "jlink"
"#,
        )
        .unwrap();

        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.platform_dir(), PathBuf::from("/opt/ticc13x0"));
        assert_eq!(
            settings.packages_dir(&PlatformDirs::new()),
            PathBuf::from("/opt/packages")
        );
        assert_eq!(settings.upload_protocol(), Some("jlink"));
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[upload]\nprotocol = \"dslite\"\n").unwrap();

        let settings = Settings::load_from_path(&path).unwrap();
        assert!(settings.platform.dir.is_none());
        assert_eq!(settings.upload_protocol(), Some("dslite"));
        let dirs = PlatformDirs::new();
        assert_eq!(settings.packages_dir(&dirs), dirs.packages_dir());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[upload\nprotocol = ").unwrap();

        assert!(matches!(
            Settings::load_from_path(&path),
            Err(SettingsError::Parse { .. })
        ));
    }
}
