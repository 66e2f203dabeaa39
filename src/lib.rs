//! ticc13x0 - TI CC13x0 build platform
//!
//! Board, package and debug-tool configuration for the TI CC13x0 family,
//! plus the Energia framework build settings.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Platform descriptor, board manifests, framework configuration
//! - [`infra`] - Directory resolution and installed package lookup
//! - [`config`] - Constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
