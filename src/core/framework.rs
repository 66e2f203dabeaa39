//! Energia framework configuration
//!
//! Energia is the Wiring-based Arduino port for TI parts. This module
//! appends the settings its CC13x0 core needs to a [`BuildEnvironment`]
//! and registers the core library build.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::board::BoardConfig;
use super::build_env::{BuildEnvironment, Define, LinkLibrary};
use super::platform::Ticc13x0Platform;
use crate::config::defaults::{
    ARDUINO_VERSION, CORE_LIBRARY, CORE_VERSION, DEVICE_FAMILY, ENERGIA_PACKAGE,
};
use crate::error::{FrameworkError, PackageError, Ticc13x0Error};
use crate::infra::package_store::PackageStore;

/// A resolved framework package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkPackage {
    /// Package root directory
    pub dir: PathBuf,
    /// Package version (e.g. "1.0.3")
    pub version: String,
}

impl FrameworkPackage {
    pub fn new(dir: impl Into<PathBuf>, version: &str) -> Self {
        Self {
            dir: dir.into(),
            version: version.to_string(),
        }
    }

    /// Look up an installed framework package
    pub fn resolve(store: &PackageStore, name: &str) -> Result<Self, PackageError> {
        Ok(Self {
            dir: store.package_dir(name)?,
            version: store.package_version(name)?,
        })
    }
}

/// Build the environment for one board of the platform.
///
/// The installed [`ENERGIA_PACKAGE`] is looked up in `store` unless
/// `framework` is given.
pub fn configure_for_board(
    platform: &Ticc13x0Platform,
    store: &PackageStore,
    board_id: &str,
    framework: Option<FrameworkPackage>,
    build_dir: &Path,
) -> Result<BuildEnvironment, Ticc13x0Error> {
    let board = platform.board_config(board_id)?;
    let framework = match framework {
        Some(framework) => framework,
        None => FrameworkPackage::resolve(store, ENERGIA_PACKAGE)?,
    };

    let mut env = BuildEnvironment::new(build_dir);
    configure_energia(&mut env, &framework, &board)?;
    Ok(env)
}

/// The `ENERGIA` define: the minor component of the framework version
pub fn energia_version(version: &str) -> Result<u32, FrameworkError> {
    version
        .split('.')
        .nth(1)
        .and_then(|minor| minor.trim().parse().ok())
        .ok_or_else(|| FrameworkError::InvalidVersion {
            version: version.to_string(),
        })
}

/// Populate `env` for building against the Energia CC13x0 core.
///
/// Requires `build.core` and `build.variant` on the board. When the board
/// sets no `build.ldscript`, `build.arduino.ldscript` is used instead.
pub fn configure_energia(
    env: &mut BuildEnvironment,
    framework: &FrameworkPackage,
    board: &BoardConfig,
) -> Result<(), FrameworkError> {
    let fw = framework.dir.as_path();
    if !fw.is_dir() {
        return Err(FrameworkError::MissingDirectory {
            path: framework.dir.clone(),
        });
    }

    let energia = energia_version(&framework.version)?;
    let core = board.require_str("build.core")?;
    let variant = board.require_str("build.variant")?;
    info!(board = %board.id, version = %framework.version, core = %core, variant = %variant, "configuring Energia framework");

    env.append_defines([
        Define::new("ARDUINO", ARDUINO_VERSION),
        Define::new("ENERGIA", energia),
        Define::new("printf", "iprintf"),
        Define::new("DEVICE_FAMILY", DEVICE_FAMILY),
        Define::new("xdc_target_types__", "gnu/targets/arm/std.h"),
        Define::new("xdc_target_name__", "M3"),
        Define::new("xdc_cfg__xheader__", "configPkg/package/cfg/energia_pm3g.h"),
        Define::new("xdc__nolocalstring", "1"),
        Define::new("CORE_VERSION", CORE_VERSION),
    ]);

    env.append_ccflags(["-mfloat-abi=soft", "-mabi=aapcs"]);

    let devices = devices_dir(fw);
    let driverlib = devices.join("driverlib");
    env.append_linkflags([
        "-Wl,-u,main".to_string(),
        "-Wl,--check-sections".to_string(),
        "-Wl,--gc-sections".to_string(),
        driverlib
            .join("bin")
            .join("gcc")
            .join("driverlib.lib")
            .display()
            .to_string(),
    ]);

    let core_dir = fw.join("cores").join(&core);
    let wiring = core_dir.join("ti").join("runtime").join("wiring");
    let variant_dir = fw.join("variants").join(&variant);
    let tirtos = fw.join("system").join("kernel").join("tirtos").join("packages");
    env.append_cpppath([
        fw.join("system").join("energia"),
        fw.join("system").join("source"),
        devices.clone(),
        devices.join("inc"),
        driverlib.clone(),
        tirtos.join("ti").join("sysbios").join("posix"),
        tirtos,
        core_dir.clone(),
        wiring.clone(),
        wiring.join("cc13xx"),
        variant_dir.clone(),
    ]);

    env.append_libpath([variant_dir, driverlib]);
    env.append_libsource_dirs([fw.join("libraries")]);

    let explicit_ldscript = board.get_str("build.ldscript").unwrap_or_default();
    if explicit_ldscript.is_empty() {
        let fallback = board.get_str("build.arduino.ldscript").unwrap_or_default();
        debug!(ldscript = %fallback, "using framework linker script");
        env.replace_ldscript(fallback);
    }

    let core_lib = env.build_library(CORE_LIBRARY, &core_dir);
    env.append_libs([LinkLibrary::Built(core_lib)]);

    Ok(())
}

fn devices_dir(fw: &Path) -> PathBuf {
    fw.join("system")
        .join("source")
        .join("ti")
        .join("devices")
        .join(DEVICE_FAMILY)
}
