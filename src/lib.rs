pub mod app;
pub mod bem;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod test_utils;
pub mod utils;

pub use error::{BemError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
