//! bemtree tree - Show the classified block tree

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::bem::BemTree;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::utils::DiskWorkspace;

#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Option overrides, e.g. `omit=js-,is-`
    #[arg(value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

pub fn run(ctx: &AppContext, _args: &TreeArgs) -> Result<()> {
    let scan = ctx.scan(&DiskWorkspace);
    let tree = &scan.classification.tree;

    if ctx.robot_mode {
        return emit_json(&robot_ok(tree, scan.failures));
    }

    let mut layout = HumanLayout::new();
    if tree.is_empty() {
        layout.push_line("No blocks found".dimmed().to_string());
    } else {
        render_tree(&mut layout, tree);
    }
    layout.failures(&scan.failures);
    emit_human(layout);
    Ok(())
}

fn render_tree(layout: &mut HumanLayout, tree: &BemTree) {
    for (name, node) in tree.iter() {
        let marker = if node.has_script { " js".cyan().to_string() } else { String::new() };
        layout.push_line(format!("{}{marker}", name.bold()));
        for modifier in &node.mods {
            layout.push_line(format!("  _{modifier}"));
        }
        for (element, elem) in &node.elems {
            layout.push_line(format!("  __{element}"));
            for modifier in &elem.mods {
                layout.push_line(format!("    _{modifier}"));
            }
        }
    }
}
