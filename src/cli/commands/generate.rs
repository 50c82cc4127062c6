//! bemtree generate - Scaffold block folders from markup

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::display_path;
use crate::app::{AppContext, Scan};
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::generate::GenerationReport;
use crate::utils::DiskWorkspace;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Option overrides, e.g. `js=src/js/blocks.js`
    #[arg(value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    files_scanned: usize,
    classes: usize,
    dropped: &'a [String],
    #[serde(flatten)]
    report: &'a GenerationReport,
}

pub fn run(ctx: &AppContext, _args: &GenerateArgs) -> Result<()> {
    let (scan, report) = ctx.generate(&DiskWorkspace);

    if ctx.robot_mode {
        generate_robot(&scan, &report)
    } else {
        generate_human(ctx, &scan, &report);
        Ok(())
    }
}

fn generate_robot(scan: &Scan, report: &GenerationReport) -> Result<()> {
    let mut failures = scan.failures.clone();
    failures.extend(report.failures.iter().cloned());

    let summary = GenerateSummary {
        files_scanned: scan.extraction.files_read,
        classes: scan.extraction.classes.len(),
        dropped: &scan.classification.dropped,
        report,
    };
    emit_json(&robot_ok(summary, failures))
}

fn generate_human(ctx: &AppContext, scan: &Scan, report: &GenerationReport) {
    let cwd = &ctx.options.cwd;
    let mut layout = HumanLayout::new();
    layout
        .title("bemtree generate")
        .kv("Markup files", &scan.extraction.files_read.to_string())
        .kv("Classes", &scan.extraction.classes.len().to_string())
        .kv("Blocks", &report.blocks.to_string());

    if !report.changed() {
        layout.blank().push_line("Nothing to create".dimmed().to_string());
    } else {
        layout.blank().section("Created");
        for path in report.stylesheets.iter().chain(&report.scripts) {
            layout.bullet(&display_path(cwd, path).green().to_string());
        }
        for line in &report.imports_added {
            layout.bullet(&format!("{} {line}", ctx.options.js.cyan()));
        }
    }

    if !scan.classification.dropped.is_empty() {
        layout.blank().section("Unattached classes");
        for token in &scan.classification.dropped {
            layout.bullet(&token.yellow().to_string());
        }
    }

    layout.failures(&scan.failures).failures(&report.failures);
    emit_human(layout);
}
