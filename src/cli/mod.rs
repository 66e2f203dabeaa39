//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::settings::Settings;
use crate::infra::dirs::PlatformDirs;
use commands::{CommandContext, Commands};
use output::OutputConfig;

/// ticc13x0 - TI CC13x0 build platform
///
/// Resolve upload/debug tool packages, board debug descriptors and Energia
/// build settings for CC13x0 boards.
#[derive(Parser, Debug)]
#[command(name = "ticc13x0")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding platform.json and boards/
    #[arg(long, global = true, env = "TICC13X0_PLATFORM_DIR")]
    pub platform_dir: Option<PathBuf>,

    /// Directory holding installed packages
    #[arg(long, global = true, env = "TICC13X0_PACKAGES_DIR")]
    pub packages_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let dirs = PlatformDirs::new();
        let settings = Settings::load(&dirs).context("Failed to load settings")?;
        let ctx = CommandContext {
            platform_dir: self
                .platform_dir
                .unwrap_or_else(|| settings.platform_dir()),
            packages_dir: self
                .packages_dir
                .unwrap_or_else(|| settings.packages_dir(&dirs)),
            default_upload_protocol: settings.upload_protocol().map(str::to_string),
            output: OutputConfig::new(self.quiet, self.json),
        };

        command.run(&ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_flags() {
        let cli = Cli::parse_from(["ticc13x0", "-vv", "boards"]);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        let cli = Cli::parse_from(["ticc13x0", "--quiet", "boards"]);
        assert_eq!(cli.log_level(), tracing::Level::ERROR);

        let cli = Cli::parse_from(["ticc13x0", "boards"]);
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
