//! Shared helpers.

pub mod fs;
pub mod paths;

pub use fs::{DiskWorkspace, Workspace};
