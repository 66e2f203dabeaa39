//! Core business logic module
//!
//! # Submodules
//!
//! - [`board`] - Board manifest parsing and dotted-key lookup
//! - [`debug`] - Default debug tool synthesis
//! - [`package`] - Package registry handling
//! - [`platform`] - Platform descriptor: package selection and board enrichment
//! - [`build_env`] - Build environment state
//! - [`framework`] - Energia framework configuration
//! - [`settings`] - User settings

pub mod board;
pub mod build_env;
pub mod debug;
pub mod framework;
pub mod package;
pub mod platform;
pub mod settings;
