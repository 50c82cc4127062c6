//! Run context shared by every command.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::bem::{Classification, FilterConfig, classify_detailed};
use crate::cli::Cli;
use crate::config::Options;
use crate::error::{Failure, Result};
use crate::extract::{Extraction, collect, find_sources};
use crate::generate::{GenerationReport, Generator, GeneratorConfig};
use crate::utils::Workspace;

pub struct AppContext {
    pub options: Options,
    pub robot_mode: bool,
}

impl AppContext {
    /// Resolve options for the current directory using the CLI's config
    /// path and `key=value` overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base = std::env::current_dir()?;
        let options = Options::load(&base, cli.config.as_deref(), &cli.overrides());
        Ok(Self::new(options, cli.robot))
    }

    #[must_use]
    pub const fn new(options: Options, robot_mode: bool) -> Self {
        Self {
            options,
            robot_mode,
        }
    }

    #[must_use]
    pub fn filter(&self) -> FilterConfig {
        FilterConfig::new(&self.options.use_list, &self.options.omit)
    }

    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::from(&self.options)
    }

    /// Find, read and classify the markup. Never fails as a whole: an
    /// unusable pattern or unreadable file ends up in [`Scan::failures`].
    pub fn scan(&self, ws: &dyn Workspace) -> Scan {
        let cwd = &self.options.cwd;
        let mut failures = Vec::new();

        let files = match find_sources(cwd, &self.options.from) {
            Ok(files) => files,
            Err(err) => {
                warn!(pattern = %self.options.from, error = %err, "No markup scanned");
                failures.push(Failure::new(&self.options.from, &err));
                Vec::new()
            }
        };
        if files.is_empty() {
            warn!(pattern = %self.options.from, cwd = %cwd.display(), "No markup files matched");
        }

        let extraction = collect(&files, cwd, ws);
        failures.extend(extraction.failures.iter().cloned());

        let classification = classify_detailed(&extraction.classes, &extraction.attrs, &self.filter());
        info!(
            files = extraction.files_read,
            classes = extraction.classes.len(),
            blocks = classification.tree.len(),
            dropped = classification.dropped.len(),
            "Markup classified"
        );

        Scan {
            files,
            extraction,
            classification,
            failures,
        }
    }

    /// Scan, then scaffold every block.
    pub fn generate(&self, ws: &dyn Workspace) -> (Scan, GenerationReport) {
        let scan = self.scan(ws);
        let config = self.generator_config();
        let report = Generator::new(&config, ws).run(&scan.classification.tree);
        (scan, report)
    }
}

/// Everything learned from the markup before any file is written.
#[derive(Debug, Clone)]
pub struct Scan {
    /// Matched markup files, relative to `cwd`.
    pub files: Vec<PathBuf>,
    pub extraction: Extraction,
    pub classification: Classification,
    pub failures: Vec<Failure>,
}
