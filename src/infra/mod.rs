//! Infrastructure layer
//!
//! Filesystem lookups outside the platform directory.

pub mod dirs;
pub mod package_store;
