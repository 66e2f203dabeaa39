//! Default configuration values

/// Platform manifest file name inside the platform directory
pub const PLATFORM_MANIFEST: &str = "platform.json";

/// Board manifests directory inside the platform directory
pub const BOARDS_SUBDIR: &str = "boards";

/// Package manifest file name inside an installed package
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "config.toml";

/// Installed packages directory relative to the home directory
pub const PACKAGES_HOME_SUBDIR: &str = ".platformio/packages";

/// Default build directory placeholder expanded by the build system
pub const BUILD_DIR: &str = "$BUILD_DIR";

/// Package type marking upload/debug tools
pub const UPLOADER_TYPE: &str = "uploader";

/// Package type marking frameworks
pub const FRAMEWORK_TYPE: &str = "framework";

/// Arduino-compatible framework name
pub const ARDUINO_FRAMEWORK: &str = "arduino";

/// Energia framework package for the CC13x0 family
pub const ENERGIA_PACKAGE: &str = "framework-energiaticc13x0";

/// Package the `arduino` framework entry is pointed at for CC13x0 boards.
/// Not registered in `platform.json`.
pub const ARDUINO_FRAMEWORK_PACKAGE: &str = "framework-energia-ticc13x0";

/// J-Link upload tool package
pub const TOOL_JLINK: &str = "tool-jlink";

/// TI DSLite upload tool package
pub const TOOL_DSLITE: &str = "tool-dslite";

/// OpenOCD upload tool package, used for every other protocol
pub const TOOL_OPENOCD: &str = "tool-openocd";

/// GDB port the J-Link server listens on
pub const JLINK_GDB_PORT: &str = "2331";

/// Value of the `ARDUINO` define
pub const ARDUINO_VERSION: u32 = 10805;

/// Value of the `CORE_VERSION` define
pub const CORE_VERSION: &str = "491";

/// Device family handled by this platform
pub const DEVICE_FAMILY: &str = "cc13x0";

/// Name of the core library built from the framework sources
pub const CORE_LIBRARY: &str = "FrameworkEnergia";
