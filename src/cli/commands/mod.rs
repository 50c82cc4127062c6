//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::Path;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod classes;
pub mod generate;
pub mod tree;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => generate::run(ctx, args),
        Commands::Tree(args) => tree::run(ctx, args),
        Commands::Classes(args) => classes::run(ctx, args),
    }
}

/// `path` relative to `cwd` when it lives under it, for display.
pub(crate) fn display_path(cwd: &Path, path: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}
