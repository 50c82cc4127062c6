//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Scan markup for BEM classes and scaffold block stylesheets and scripts
#[derive(Parser, Debug)]
#[command(name = "bemtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON on stdout instead of human-readable output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of ./bemtree.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Option overrides, e.g. `from=./pages/*.html to=blocks`
    #[arg(value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl Cli {
    /// The subcommand to run; `generate` when none was given.
    #[must_use]
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| {
            Commands::Generate(commands::generate::GenerateArgs::default())
        })
    }

    /// `key=value` overrides from the bare command and the subcommand, in
    /// command-line order.
    #[must_use]
    pub fn overrides(&self) -> Vec<String> {
        let mut all = self.overrides.clone();
        if let Some(command) = &self.command {
            all.extend(command.overrides().iter().cloned());
        }
        all
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a folder, stylesheet and optional script per block (default)
    Generate(commands::generate::GenerateArgs),

    /// Print the classified block tree without writing anything
    Tree(commands::tree::TreeArgs),

    /// Print the ordered class tokens and data attributes found in markup
    Classes(commands::classes::ClassesArgs),
}

impl Commands {
    #[must_use]
    pub fn overrides(&self) -> &[String] {
        match self {
            Self::Generate(args) => &args.overrides,
            Self::Tree(args) => &args.overrides,
            Self::Classes(args) => &args.overrides,
        }
    }
}
