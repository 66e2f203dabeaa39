//! Package registry handling
//!
//! The `packages` table of `platform.json` maps a package name to its
//! options. Platform logic toggles `optional` and drops uploader packages
//! that are not needed for the selected upload protocol.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::defaults::UPLOADER_TYPE;

/// Options of one registered package
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackageOptions {
    /// Package type (e.g. "uploader", "framework", "toolchain")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,

    /// Optional packages are only installed when something requires them
    #[serde(default)]
    pub optional: bool,

    /// Version requirement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageOptions {
    /// Whether the package is an upload/debug tool
    pub fn is_uploader(&self) -> bool {
        self.package_type.as_deref() == Some(UPLOADER_TYPE)
    }

    /// Whether the package has the given type
    pub fn has_type(&self, package_type: &str) -> bool {
        self.package_type.as_deref() == Some(package_type)
    }
}

/// Registered packages keyed by name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PackageRegistry {
    packages: BTreeMap<String, PackageOptions>,
}

impl PackageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a package
    pub fn insert(&mut self, name: &str, options: PackageOptions) {
        self.packages.insert(name.to_string(), options);
    }

    /// Get a package's options
    pub fn get(&self, name: &str) -> Option<&PackageOptions> {
        self.packages.get(name)
    }

    /// Whether a package is registered
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Iterate packages in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageOptions)> {
        self.packages.iter().map(|(name, opts)| (name.as_str(), opts))
    }

    /// Iterate packages in name order, allowing modification
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PackageOptions)> {
        self.packages
            .iter_mut()
            .map(|(name, opts)| (name.as_str(), opts))
    }

    /// Number of registered packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Mark a package required, if it is registered.
    ///
    /// Returns whether the package was present.
    pub fn require(&mut self, name: &str) -> bool {
        match self.packages.get_mut(name) {
            Some(opts) => {
                opts.optional = false;
                true
            }
            None => false,
        }
    }

    /// Names of uploader packages other than `keep`
    pub fn uploaders_except(&self, keep: &str) -> BTreeSet<String> {
        self.iter()
            .filter(|(name, opts)| opts.is_uploader() && *name != keep)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Remove every named package, returning the ones that were present
    pub fn remove_all<'a, I>(&mut self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        names
            .into_iter()
            .filter(|name| self.packages.remove(name.as_str()).is_some())
            .cloned()
            .collect()
    }

    /// Names of packages that are not optional
    pub fn required(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, opts)| !opts.optional)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
