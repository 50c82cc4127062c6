//! SCSS skeleton for one block.

use crate::bem::BemNode;

/// Render the nested rule skeleton for `block`.
///
/// `prefix` goes above the block rule, `suffix` is the first line inside it.
/// Either is omitted when empty. Rule bodies are left blank for the author.
#[must_use]
pub fn render_stylesheet(block: &str, node: &BemNode, prefix: &str, suffix: &str) -> String {
    let mut out = String::new();

    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push_str("\n\n");
    }

    out.push_str(&format!(".{block} {{\n"));
    if !suffix.is_empty() {
        out.push_str(&format!("\t{suffix}\n\n"));
    }

    for modifier in &node.mods {
        out.push_str(&format!("\t&_{modifier} {{\n\t\t\n\t}}\n\n"));
    }

    for (element, elem) in &node.elems {
        out.push_str(&format!("\t&__{element} {{\n"));
        if elem.mods.is_empty() {
            out.push('\n');
        }
        for modifier in &elem.mods {
            out.push_str(&format!("\n\t\t&_{modifier} {{\n\t\t\t\n\t\t}}\n"));
        }
        out.push_str("\t}\n\n");
    }

    out.push_str("}\n");
    out
}
