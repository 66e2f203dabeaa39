//! Platform-specific directory management
//!
//! Resolves the config directory and the directory holding installed
//! packages. Environment variables override the defaults:
//! - `TICC13X0_CONFIG_DIR` - Override config directory
//! - `TICC13X0_PACKAGES_DIR` - Override installed packages directory

use std::env;
use std::path::PathBuf;

use crate::config::defaults::{PACKAGES_HOME_SUBDIR, SETTINGS_FILE};

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "TICC13X0_CONFIG_DIR";
pub const ENV_PACKAGES_DIR: &str = "TICC13X0_PACKAGES_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "ticc13x0";

/// Directory provider for ticc13x0
#[derive(Debug, Clone)]
pub struct PlatformDirs {
    config_dir: PathBuf,
    packages_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve directories from the environment, then platform defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            packages_dir: Self::resolve_packages_dir(),
        }
    }

    /// Config directory
    ///
    /// - Linux: `$XDG_CONFIG_HOME/ticc13x0` or `~/.config/ticc13x0`
    /// - macOS: `~/Library/Application Support/ticc13x0`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Installed packages directory, `~/.platformio/packages` by default
    #[must_use]
    pub fn packages_dir(&self) -> PathBuf {
        self.packages_dir.clone()
    }

    /// Path of `config.toml` in the config directory
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    fn resolve_packages_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_PACKAGES_DIR) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PACKAGES_HOME_SUBDIR)
    }
}

impl Default for PlatformDirs {
    fn default() -> Self {
        Self::new()
    }
}
