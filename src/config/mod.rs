//! Configuration constants
//!
//! Fixed identifiers and default values shared across the crate.

pub mod defaults;
