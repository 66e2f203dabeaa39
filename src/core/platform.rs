//! Platform descriptor
//!
//! Loads `platform.json` and the board manifests next to it, and applies
//! the CC13x0 rules on top of the generic platform behavior: one uploader
//! package per build, a required Energia package when the Arduino framework
//! is used, and default debug tools on every board.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::board::BoardConfig;
use super::debug::{add_default_debug_tools, HostOs};
use super::package::PackageRegistry;
use crate::config::defaults::{
    ARDUINO_FRAMEWORK, ARDUINO_FRAMEWORK_PACKAGE, BOARDS_SUBDIR, FRAMEWORK_TYPE,
    PLATFORM_MANIFEST, TOOL_DSLITE, TOOL_JLINK, TOOL_OPENOCD,
};
use crate::error::{BoardError, PlatformError};

/// Parsed `platform.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlatformManifest {
    /// Platform id
    pub name: String,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Platform version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Frameworks keyed by name
    #[serde(default)]
    pub frameworks: BTreeMap<String, FrameworkEntry>,

    /// Registered packages
    #[serde(default)]
    pub packages: PackageRegistry,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A framework declared by the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FrameworkEntry {
    /// Package holding the framework sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Build script configuring the framework
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Project variables relevant to package selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildVariables {
    /// Selected board id
    #[serde(default)]
    pub board: Option<String>,

    /// Upload protocol override
    #[serde(default)]
    pub upload_protocol: Option<String>,

    /// Requested frameworks
    #[serde(default, alias = "pioframework")]
    pub frameworks: Vec<String>,
}

impl BuildVariables {
    /// Variables for a board with no overrides
    pub fn for_board(board: &str) -> Self {
        Self {
            board: Some(board.to_string()),
            ..Self::default()
        }
    }

    /// Override the upload protocol
    #[must_use]
    pub fn with_upload_protocol(mut self, protocol: &str) -> Self {
        self.upload_protocol = Some(protocol.to_string());
        self
    }

    /// Request a framework
    #[must_use]
    pub fn with_framework(mut self, framework: &str) -> Self {
        self.frameworks.push(framework.to_string());
        self
    }
}

/// Result of a board lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Boards {
    /// A single requested board
    Single(Box<BoardConfig>),
    /// Every board, keyed by id
    All(BTreeMap<String, BoardConfig>),
}

impl Boards {
    /// Whether the lookup found nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::All(boards) => boards.is_empty(),
        }
    }

    /// Flatten into a list of boards in id order
    pub fn into_vec(self) -> Vec<BoardConfig> {
        match self {
            Self::Single(board) => vec![*board],
            Self::All(boards) => boards.into_values().collect(),
        }
    }
}

/// Generic platform behavior shared by every chip family
#[derive(Debug, Clone)]
pub struct PlatformBase {
    dir: PathBuf,
    manifest: PlatformManifest,
}

impl PlatformBase {
    /// Load `platform.json` from a platform directory
    pub fn load(dir: &Path) -> Result<Self, PlatformError> {
        let path = dir.join(PLATFORM_MANIFEST);
        if !path.exists() {
            return Err(PlatformError::ManifestNotFound { path });
        }

        let content = fs::read_to_string(&path).map_err(|e| PlatformError::ReadError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        let manifest = serde_json::from_str(&content).map_err(|e| PlatformError::ParseError {
            path: path.clone(),
            error: e.to_string(),
        })?;

        Ok(Self::from_manifest(dir, manifest))
    }

    /// Build from an already parsed manifest
    pub fn from_manifest(dir: &Path, manifest: PlatformManifest) -> Self {
        Self {
            dir: dir.to_path_buf(),
            manifest,
        }
    }

    /// Parsed manifest
    pub fn manifest(&self) -> &PlatformManifest {
        &self.manifest
    }

    /// Registered packages
    pub fn packages(&self) -> &PackageRegistry {
        &self.manifest.packages
    }

    /// Registered packages, for modification
    pub fn packages_mut(&mut self) -> &mut PackageRegistry {
        &mut self.manifest.packages
    }

    /// Declared frameworks
    pub fn frameworks(&self) -> &BTreeMap<String, FrameworkEntry> {
        &self.manifest.frameworks
    }

    /// Declared frameworks, for modification
    pub fn frameworks_mut(&mut self) -> &mut BTreeMap<String, FrameworkEntry> {
        &mut self.manifest.frameworks
    }

    /// Load the manifest of one board
    pub fn board_config(&self, id: &str) -> Result<BoardConfig, BoardError> {
        let path = self.boards_dir().join(format!("{id}.json"));
        if !path.is_file() {
            return Err(BoardError::NotFound { id: id.to_string() });
        }
        BoardConfig::load(&path)
    }

    /// Look up one board, or every board when `id` is `None`
    pub fn get_boards(&self, id: Option<&str>) -> Result<Boards, BoardError> {
        if let Some(id) = id {
            return Ok(Boards::Single(Box::new(self.board_config(id)?)));
        }

        let dir = self.boards_dir();
        let mut boards = BTreeMap::new();
        if !dir.is_dir() {
            return Ok(Boards::All(boards));
        }

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        {
            let board = BoardConfig::load(entry.path())?;
            boards.insert(board.id.clone(), board);
        }

        Ok(Boards::All(boards))
    }

    /// Enable the packages a build needs and return the required ones.
    ///
    /// Requested frameworks get their package marked required. Upload
    /// targets require every uploader; `nobuild` makes everything except
    /// frameworks and uploaders optional.
    pub fn configure_default_packages(
        &mut self,
        variables: &BuildVariables,
        targets: &[String],
    ) -> Vec<String> {
        for framework in &variables.frameworks {
            let framework = framework.trim().to_lowercase();
            let package = self
                .manifest
                .frameworks
                .get(&framework)
                .and_then(|entry| entry.package.clone());
            if let Some(package) = package {
                if self.manifest.packages.require(&package) {
                    debug!(%framework, %package, "framework package required");
                }
            }
        }

        let uploading = targets.iter().any(|t| t.contains("upload") || t == "program");
        let nobuild = targets.iter().any(|t| t == "nobuild");
        if uploading {
            for (_, opts) in self.manifest.packages.iter_mut() {
                if opts.is_uploader() {
                    opts.optional = false;
                } else if nobuild && !opts.has_type(FRAMEWORK_TYPE) {
                    opts.optional = true;
                }
            }
        }

        self.manifest.packages.required()
    }

    fn boards_dir(&self) -> PathBuf {
        self.dir.join(BOARDS_SUBDIR)
    }
}

/// The TI CC13x0 platform
#[derive(Debug, Clone)]
pub struct Ticc13x0Platform {
    base: PlatformBase,
    host: HostOs,
}

impl Ticc13x0Platform {
    /// Wrap the generic platform, targeting the current host
    pub fn new(base: PlatformBase) -> Self {
        Self {
            base,
            host: HostOs::current(),
        }
    }

    /// Load from a platform directory
    pub fn load(dir: &Path) -> Result<Self, PlatformError> {
        Ok(Self::new(PlatformBase::load(dir)?))
    }

    /// Override the host OS used for debug server executables
    #[must_use]
    pub fn with_host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }

    /// The generic platform underneath
    pub fn base(&self) -> &PlatformBase {
        &self.base
    }

    /// Registered packages
    pub fn packages(&self) -> &PackageRegistry {
        self.base.packages()
    }

    /// Load a board manifest without enrichment
    pub fn board_config(&self, id: &str) -> Result<BoardConfig, BoardError> {
        self.base.board_config(id)
    }

    /// Keep a single uploader package and require the framework package.
    ///
    /// Without a board the generic behavior applies unchanged.
    pub fn configure_default_packages(
        &mut self,
        variables: &BuildVariables,
        targets: &[String],
    ) -> Result<Vec<String>, BoardError> {
        let Some(board_id) = variables.board.as_deref() else {
            return Ok(self.base.configure_default_packages(variables, targets));
        };

        let board = self.base.board_config(board_id)?;
        let upload_protocol = variables
            .upload_protocol
            .clone()
            .or_else(|| board.manifest.upload.protocol.clone())
            .unwrap_or_default();

        let upload_tool = upload_tool_for(&upload_protocol);
        info!(board = board_id, protocol = %upload_protocol, tool = upload_tool, "selected upload tool");

        let disabled = self.base.packages().uploaders_except(upload_tool);

        if variables.frameworks.iter().any(|f| f == ARDUINO_FRAMEWORK) {
            let package = framework_package(&board);
            self.base
                .frameworks_mut()
                .entry(ARDUINO_FRAMEWORK.to_string())
                .or_default()
                .package = Some(package.to_string());
            if self.base.packages_mut().require(package) {
                debug!(package, "framework package marked required");
            }
        }

        let removed = self.base.packages_mut().remove_all(&disabled);
        if !removed.is_empty() {
            debug!(packages = ?removed, "removed unused upload tools");
        }

        Ok(self.base.configure_default_packages(variables, targets))
    }

    /// Look up boards with their default debug tools filled in
    pub fn get_boards(&self, id: Option<&str>) -> Result<Boards, BoardError> {
        let result = self.base.get_boards(id)?;
        if result.is_empty() {
            return Ok(result);
        }

        match result {
            Boards::Single(board) => Ok(Boards::Single(Box::new(
                self.add_default_debug_tools(*board)?,
            ))),
            Boards::All(boards) => boards
                .into_iter()
                .map(|(id, board)| self.add_default_debug_tools(board).map(|b| (id, b)))
                .collect::<Result<BTreeMap<_, _>, BoardError>>()
                .map(Boards::All),
        }
    }

    /// Fill `debug.tools` for one board
    pub fn add_default_debug_tools(&self, board: BoardConfig) -> Result<BoardConfig, BoardError> {
        add_default_debug_tools(board, self.host)
    }
}

/// Uploader package for an upload protocol; unknown protocols use OpenOCD
pub fn upload_tool_for(protocol: &str) -> &'static str {
    match protocol {
        "jlink" => TOOL_JLINK,
        "dslite" => TOOL_DSLITE,
        _ => TOOL_OPENOCD,
    }
}

/// Framework package the `arduino` entry is pointed at for a board.
///
/// Both MCU branches name the same package, so CC1350 parts get the CC13x0
/// name too. Likely a latent bug; kept until a separate CC1350 package
/// exists. The name differs from the registered
/// [`ENERGIA_PACKAGE`](crate::config::defaults::ENERGIA_PACKAGE), so the
/// override leaves that package's `optional` flag alone.
#[allow(clippy::if_same_then_else)]
pub fn framework_package(board: &BoardConfig) -> &'static str {
    let mcu = board.manifest.build.mcu.as_deref().unwrap_or_default();
    if mcu.starts_with("cc13") {
        ARDUINO_FRAMEWORK_PACKAGE
    } else {
        ARDUINO_FRAMEWORK_PACKAGE
    }
}
