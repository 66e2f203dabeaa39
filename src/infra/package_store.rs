//! Installed package lookup
//!
//! Every installed package is a directory named after the package with a
//! `package.json` at its root carrying at least a `version`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::PACKAGE_MANIFEST;
use crate::error::PackageError;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    version: Option<String>,
}

/// Directory of installed packages
#[derive(Debug, Clone)]
pub struct PackageStore {
    root: PathBuf,
}

impl PackageStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Directory of an installed package
    pub fn package_dir(&self, name: &str) -> Result<PathBuf, PackageError> {
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Err(PackageError::NotInstalled {
                name: name.to_string(),
                path: dir,
            });
        }
        Ok(dir)
    }

    /// Version recorded in an installed package's `package.json`
    pub fn package_version(&self, name: &str) -> Result<String, PackageError> {
        let path = self.package_dir(name)?.join(PACKAGE_MANIFEST);

        let content = fs::read_to_string(&path).map_err(|e| PackageError::ReadError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        let manifest: PackageManifest =
            serde_json::from_str(&content).map_err(|e| PackageError::ParseError {
                path: path.clone(),
                error: e.to_string(),
            })?;

        manifest
            .version
            .filter(|v| !v.is_empty())
            .ok_or_else(|| PackageError::MissingVersion {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(name: &str, manifest: &str) -> (TempDir, PackageStore) {
        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join(name);
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join(PACKAGE_MANIFEST), manifest).unwrap();
        let store = PackageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_resolves_dir_and_version() {
        let (dir, store) = store_with(
            "framework-energiaticc13x0",
            r#"{"name": "framework-energiaticc13x0", "version": "1.0.3"}"#,
        );

        assert_eq!(
            store.package_dir("framework-energiaticc13x0").unwrap(),
            dir.path().join("framework-energiaticc13x0")
        );
        assert_eq!(store.package_version("framework-energiaticc13x0").unwrap(), "1.0.3");
    }

    #[test]
    fn test_missing_package() {
        let dir = TempDir::new().unwrap();
        let store = PackageStore::new(dir.path());

        assert!(matches!(
            store.package_dir("tool-openocd"),
            Err(PackageError::NotInstalled { .. })
        ));
    }

    #[test]
    fn test_missing_version() {
        let (_dir, store) = store_with("tool-jlink", r#"{"name": "tool-jlink"}"#);

        assert!(matches!(
            store.package_version("tool-jlink"),
            Err(PackageError::MissingVersion { .. })
        ));
    }

    #[test]
    fn test_malformed_manifest() {
        let (_dir, store) = store_with("tool-jlink", "not json");

        assert!(matches!(
            store.package_version("tool-jlink"),
            Err(PackageError::ParseError { .. })
        ));
    }
}
