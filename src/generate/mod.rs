//! Block directory scaffolding from a [`BemTree`].
//!
//! Every block gets `<to>/<block>/<block>.<style_ext>`; scripted blocks also
//! get `<to>/<block>/<block>.<script_ext>` and a line in the shared manifest.
//! Existing files are never touched. A failure stops only the block it
//! happened in.

pub mod manifest;
pub mod stylesheet;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::bem::{BemNode, BemTree};
use crate::config::Options;
use crate::error::{BemError, ErrorCode, Failure};
use crate::utils::Workspace;
use crate::utils::paths::import_specifier;

pub use manifest::{import_line, update_manifest};
pub use stylesheet::render_stylesheet;

/// Output settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base directory; `to` and `manifest` are resolved against it.
    pub root: PathBuf,
    pub to: PathBuf,
    pub style_ext: String,
    pub script_ext: String,
    pub prefix: String,
    pub suffix: String,
    /// Script manifest. `None` disables script stubs entirely.
    pub manifest: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from(&Options::default())
    }
}

impl From<&Options> for GeneratorConfig {
    fn from(options: &Options) -> Self {
        Self {
            root: options.cwd.clone(),
            to: PathBuf::from(&options.to),
            style_ext: options.style_ext.clone(),
            script_ext: options.script_ext.clone(),
            prefix: options.prefix.clone(),
            suffix: options.suffix.clone(),
            manifest: (!options.js.trim().is_empty()).then(|| PathBuf::from(options.js.trim())),
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn block_dir(&self, block: &str) -> PathBuf {
        self.root.join(&self.to).join(block)
    }

    #[must_use]
    pub fn stylesheet_path(&self, block: &str) -> PathBuf {
        self.block_dir(block).join(format!("{block}.{}", self.style_ext))
    }

    #[must_use]
    pub fn script_path(&self, block: &str) -> PathBuf {
        self.block_dir(block).join(format!("{block}.{}", self.script_ext))
    }

    #[must_use]
    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.manifest.as_ref().map(|m| self.root.join(m))
    }
}

/// What a run created, skipped, and failed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub blocks: usize,
    pub stylesheets: Vec<PathBuf>,
    pub scripts: Vec<PathBuf>,
    /// Paths left alone because something already exists there.
    pub skipped: Vec<PathBuf>,
    pub imports_added: Vec<String>,
    pub failures: Vec<Failure>,
}

impl GenerationReport {
    /// Whether the run wrote anything at all.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.stylesheets.is_empty() || !self.scripts.is_empty() || !self.imports_added.is_empty()
    }
}

/// Writes block skeletons through a [`Workspace`].
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    ws: &'a dyn Workspace,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(config: &'a GeneratorConfig, ws: &'a dyn Workspace) -> Self {
        Self { config, ws }
    }

    /// Scaffold every block in tree order, then update the manifest once.
    #[must_use]
    pub fn run(&self, tree: &BemTree) -> GenerationReport {
        let mut report = GenerationReport {
            blocks: tree.len(),
            ..GenerationReport::default()
        };
        let mut imports = Vec::new();

        for (name, node) in tree.iter() {
            if let Err(failure) = self.scaffold_block(name, node, &mut report, &mut imports) {
                report.failures.push(failure);
            }
        }

        if let Some(manifest) = self.config.manifest_path() {
            if !imports.is_empty() {
                self.write_manifest(&manifest, &imports, &mut report);
            }
        }

        info!(
            blocks = report.blocks,
            stylesheets = report.stylesheets.len(),
            scripts = report.scripts.len(),
            skipped = report.skipped.len(),
            failures = report.failures.len(),
            "Generation finished"
        );
        report
    }

    fn scaffold_block(
        &self,
        name: &str,
        node: &BemNode,
        report: &mut GenerationReport,
        imports: &mut Vec<String>,
    ) -> Result<(), Failure> {
        let dir = self.config.block_dir(name);

        let stylesheet = self.config.stylesheet_path(name);
        if self.ws.exists(&stylesheet) {
            debug!(path = %stylesheet.display(), "Stylesheet exists, leaving it alone");
            report.skipped.push(stylesheet);
        } else {
            self.create_dir(&dir)?;
            let content = render_stylesheet(name, node, &self.config.prefix, &self.config.suffix);
            match self.write_file(&stylesheet, &content) {
                Ok(()) => report.stylesheets.push(stylesheet),
                Err(failure) => report.failures.push(failure),
            }
        }

        if !node.has_script {
            return Ok(());
        }
        let Some(manifest) = self.config.manifest_path() else {
            debug!(block = name, "No script manifest configured, skipping script stub");
            return Ok(());
        };

        let script = self.config.script_path(name);
        if self.ws.exists(&script) {
            debug!(path = %script.display(), "Script stub exists, leaving it alone");
            report.skipped.push(script);
            return Ok(());
        }

        self.create_dir(&dir)?;
        self.write_file(&script, "")?;
        let from_dir = manifest.parent().unwrap_or_else(|| Path::new(""));
        imports.push(import_line(&import_specifier(from_dir, &script)));
        report.scripts.push(script);
        Ok(())
    }

    fn create_dir(&self, dir: &Path) -> Result<(), Failure> {
        self.ws.create_dir_all(dir).map_err(|source| {
            let err = BemError::CreateDir {
                path: dir.to_path_buf(),
                source,
            };
            warn!(path = %dir.display(), error = %err, "Abandoning block");
            Failure::new(dir, &err)
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), Failure> {
        self.ws
            .write(path, content)
            .map(|()| info!(path = %path.display(), "File created"))
            .map_err(|source| {
                let err = BemError::WriteFile {
                    path: path.to_path_buf(),
                    source,
                };
                warn!(path = %path.display(), error = %err, "File not created");
                Failure::new(path, &err)
            })
    }

    fn write_manifest(&self, manifest: &Path, imports: &[String], report: &mut GenerationReport) {
        match update_manifest(self.ws, manifest, imports) {
            Ok(added) => {
                if !added.is_empty() {
                    info!(path = %manifest.display(), added = added.len(), "Script manifest updated");
                }
                report.imports_added = added;
            }
            Err(err) => {
                warn!(path = %manifest.display(), error = %err, "Script manifest not updated");
                report
                    .failures
                    .push(Failure::new(manifest, &err).with_code(ErrorCode::ManifestUpdateFailed));
            }
        }
    }
}
