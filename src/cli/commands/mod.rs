//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod boards;
pub mod configure;
pub mod debug_tools;
pub mod packages;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use std::path::PathBuf;

use crate::core::platform::Ticc13x0Platform;
use crate::config::defaults::BUILD_DIR;
use super::output::OutputConfig;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory holding platform.json and boards/
    pub platform_dir: PathBuf,
    /// Installed packages directory
    pub packages_dir: PathBuf,
    /// Upload protocol from the user settings
    pub default_upload_protocol: Option<String>,
    /// Output mode
    pub output: OutputConfig,
}

impl CommandContext {
    /// Load the platform from the configured directory
    pub fn load_platform(&self) -> Result<Ticc13x0Platform> {
        Ticc13x0Platform::load(&self.platform_dir).with_context(|| {
            format!(
                "Failed to load platform from '{}'",
                self.platform_dir.display()
            )
        })
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List boards, or show one, with their debug tools
    Boards {
        /// Board id
        id: Option<String>,
    },

    /// Select the packages a build needs
    Packages {
        /// Board id
        #[arg(short, long)]
        board: Option<String>,

        /// Upload protocol (overrides the board default)
        #[arg(short, long)]
        upload_protocol: Option<String>,

        /// Framework to build with (repeatable)
        #[arg(short, long = "framework")]
        frameworks: Vec<String>,

        /// Build target (repeatable, e.g. upload, nobuild)
        #[arg(short, long = "target")]
        targets: Vec<String>,
    },

    /// Print the debug tool descriptors of a board as JSON
    DebugTools {
        /// Board id
        board: String,
    },

    /// Print the Energia build environment for a board
    Configure {
        /// Board id
        #[arg(short, long)]
        board: String,

        /// Framework package directory (defaults to the installed package)
        #[arg(long, requires = "framework_version")]
        framework_dir: Option<PathBuf>,

        /// Framework package version
        #[arg(long, requires = "framework_dir")]
        framework_version: Option<String>,

        /// Build output directory
        #[arg(long, default_value = BUILD_DIR)]
        build_dir: PathBuf,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Boards { id } => boards::execute(ctx, id.as_deref()),
            Self::Packages {
                board,
                upload_protocol,
                frameworks,
                targets,
            } => packages::execute(ctx, board, upload_protocol, frameworks, &targets),
            Self::DebugTools { board } => debug_tools::execute(ctx, &board),
            Self::Configure {
                board,
                framework_dir,
                framework_version,
                build_dir,
            } => configure::execute(ctx, &board, framework_dir.zip(framework_version), &build_dir),
        }
    }
}
