//! Error types for ticc13x0
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Board-related errors
#[derive(Error, Debug)]
pub enum BoardError {
    /// Board not found
    #[error("Unknown board ID '{id}'")]
    NotFound { id: String },

    /// Missing required field
    #[error("Board '{board}' is missing required field '{field}'")]
    MissingField { board: String, field: String },

    /// J-Link debugging declared without a device id
    #[error("Missed J-Link Device ID for {board}")]
    MissingJlinkDevice { board: String },

    /// XDS110 debugging declared without an OpenOCD chip name
    #[error("Missed OpenOCD chip name for {board}")]
    MissingOpenocdChipname { board: String },

    /// Failed to read a board manifest
    #[error("Failed to read board manifest '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Parse error
    #[error("Failed to parse board manifest '{path}': {error}")]
    ParseError { path: PathBuf, error: String },
}

/// Package-related errors
#[derive(Error, Debug)]
pub enum PackageError {
    /// Package not installed in the packages directory
    #[error("Package '{name}' is not installed (looked in '{path}')")]
    NotInstalled { name: String, path: PathBuf },

    /// Package manifest has no version
    #[error("Package '{name}' has no version in its package.json")]
    MissingVersion { name: String },

    /// Failed to read a package manifest
    #[error("Failed to read package manifest '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Parse error
    #[error("Failed to parse package manifest '{path}': {error}")]
    ParseError { path: PathBuf, error: String },
}

/// Framework configuration errors
#[derive(Error, Debug)]
pub enum FrameworkError {
    /// Framework package directory is missing
    #[error("Framework directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    /// Framework version does not carry a numeric minor component
    #[error("Invalid framework version '{version}': expected at least MAJOR.MINOR")]
    InvalidVersion { version: String },

    /// Board configuration error
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Platform manifest errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// platform.json not found
    #[error("Platform manifest not found at '{path}'")]
    ManifestNotFound { path: PathBuf },

    /// Failed to read platform.json
    #[error("Failed to read platform manifest '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse platform.json
    #[error("Failed to parse platform manifest '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Board error
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Top-level ticc13x0 error type
#[derive(Error, Debug)]
pub enum Ticc13x0Error {
    /// Board error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Package error
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// Framework error
    #[error("Framework error: {0}")]
    Framework(#[from] FrameworkError),

    /// Platform error
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}
