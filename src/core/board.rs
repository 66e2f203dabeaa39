//! Board manifest handling
//!
//! Parses `boards/<id>.json` manifests that describe one hardware target.
//! Keys this crate does not interpret are kept in `extra` maps so a manifest
//! serializes back with every field it was loaded with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::BoardError;

/// Complete board manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoardManifest {
    /// Human readable board name
    #[serde(default)]
    pub name: String,

    /// Board vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Frameworks the board supports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<String>,

    /// Build parameters
    #[serde(default)]
    pub build: BuildSection,

    /// Upload settings
    #[serde(default)]
    pub upload: UploadSection,

    /// Debug settings
    #[serde(default)]
    pub debug: DebugSection,

    /// Uninterpreted top-level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `build` section of a board manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildSection {
    /// Framework core directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core: Option<String>,

    /// Framework variant directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// MCU identifier (e.g. "cc1310f128")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcu: Option<String>,

    /// CPU core (e.g. "cortex-m3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,

    /// CPU frequency (e.g. "48000000L")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_cpu: Option<String>,

    /// Explicit linker script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldscript: Option<String>,

    /// Arduino-framework specific build parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arduino: Option<ArduinoBuild>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `build.arduino` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArduinoBuild {
    /// Fallback linker script used by the Energia framework
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldscript: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `upload` section of a board manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadSection {
    /// Default upload protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Every protocol the board can be flashed with
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `debug` section of a board manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugSection {
    /// Device name passed to the J-Link GDB server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlink_device: Option<String>,

    /// Value for OpenOCD's `CHIPNAME` variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openocd_chipname: Option<String>,

    /// OpenOCD target config name (without `.cfg`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openocd_target: Option<String>,

    /// Debug probes soldered on the board
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub onboard_tools: Vec<String>,

    /// Debug tools keyed by protocol name
    #[serde(default)]
    pub tools: BTreeMap<String, DebugTool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A debug tool entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugTool {
    /// GDB server to launch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<DebugServer>,

    /// Whether the probe is part of the board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboard: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// GDB server description
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugServer {
    /// Package that ships the server
    pub package: String,

    /// Executable path relative to the package directory
    pub executable: String,

    /// Command-line arguments
    #[serde(default)]
    pub arguments: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DebugTool {
    /// Whether the probe is on the board; absent means no
    pub fn is_onboard(&self) -> bool {
        self.onboard.unwrap_or(false)
    }
}

/// A board id together with its manifest
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoardConfig {
    /// Board id (manifest file stem)
    pub id: String,

    /// Parsed manifest
    #[serde(flatten)]
    pub manifest: BoardManifest,
}

impl BoardConfig {
    /// Parse a manifest from a JSON string
    pub fn from_json(id: &str, content: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: id.to_string(),
            manifest: serde_json::from_str(content)?,
        })
    }

    /// Load `<id>.json`, taking the id from the file stem
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = fs::read_to_string(path).map_err(|e| BoardError::ReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_json(&id, &content).map_err(|e| BoardError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Look up a dotted key such as `build.core`
    pub fn get(&self, key: &str) -> Option<Value> {
        let pointer = format!("/{}", key.replace('.', "/"));
        serde_json::to_value(&self.manifest)
            .ok()?
            .pointer(&pointer)
            .cloned()
    }

    /// Look up a dotted key holding a string
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a dotted key that must hold a string
    pub fn require_str(&self, key: &str) -> Result<String, BoardError> {
        self.get_str(key).ok_or_else(|| BoardError::MissingField {
            board: self.id.clone(),
            field: key.to_string(),
        })
    }
}
