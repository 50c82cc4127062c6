//! bemtree classes - Show the ordered class tokens and data attributes

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::extract::{AttrSet, ClassSet};
use crate::utils::DiskWorkspace;

#[derive(Args, Debug, Clone, Default)]
pub struct ClassesArgs {
    /// Option overrides, e.g. `from=./pages/**/*.html`
    #[arg(value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ClassesOutput<'a> {
    files: usize,
    classes: &'a ClassSet,
    attributes: &'a AttrSet,
}

pub fn run(ctx: &AppContext, _args: &ClassesArgs) -> Result<()> {
    let scan = ctx.scan(&DiskWorkspace);
    let extraction = &scan.extraction;

    if ctx.robot_mode {
        let output = ClassesOutput {
            files: extraction.files_read,
            classes: &extraction.classes,
            attributes: &extraction.attrs,
        };
        return emit_json(&robot_ok(output, scan.failures.clone()));
    }

    let mut layout = HumanLayout::new();
    layout.section(&format!("Classes ({})", extraction.classes.len()));
    for token in extraction.classes.iter() {
        layout.bullet(token);
    }
    layout
        .blank()
        .section(&format!("Data attributes ({})", extraction.attrs.len()));
    for name in extraction.attrs.iter() {
        layout.bullet(&format!("data-{}", name.dimmed()));
    }
    layout.failures(&scan.failures);
    emit_human(layout);
    Ok(())
}
