//! Single forward pass from an ordered class set to a [`BemTree`].
//!
//! The pass is a fold over [`ClassifierState`]: the tree built so far plus
//! the name of the most recently declared block (the cursor). Modifiers and
//! elements attach only to the cursor block. A derivative seen before its
//! block, or after another block took the cursor, is dropped.

use tracing::trace;

use super::filter::FilterConfig;
use super::token::{SCRIPT_SUFFIX, TokenKind};
use super::tree::{BemNode, BemTree};
use crate::extract::{AttrSet, ClassSet};

/// Outcome of a classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub tree: BemTree,
    /// Tokens that passed the filter but attached to nothing.
    pub dropped: Vec<String>,
    /// Number of tokens rejected by the filter.
    pub filtered: usize,
}

/// Accumulator threaded through the pass.
#[derive(Debug, Clone, Default)]
pub struct ClassifierState {
    tree: BemTree,
    cursor: Option<String>,
    dropped: Vec<String>,
}

impl ClassifierState {
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    #[must_use]
    pub const fn tree(&self) -> &BemTree {
        &self.tree
    }

    /// Consume one token that already passed the filter.
    #[must_use]
    pub fn step(mut self, token: &str, attrs: &AttrSet) -> Self {
        let attached = match TokenKind::parse(token) {
            TokenKind::Block { name } => {
                self.tree.declare(&name);
                self.cursor = Some(name);
                true
            }
            TokenKind::Modifier { block, modifier } => self
                .cursor_node(&block)
                .map(|node| node.mods.insert(modifier))
                .is_some(),
            TokenKind::Element { block, element } => self
                .cursor_node(&block)
                .map(|node| node.element_mut(&element))
                .is_some(),
            TokenKind::ElementModifier {
                block,
                element,
                modifier,
            } => self
                .cursor_node(&block)
                .map(|node| node.element_mut(&element).mods.insert(modifier))
                .is_some(),
            TokenKind::ScriptMarker { block } => self
                .cursor_node(&block)
                .map(|node| node.has_script = true)
                .is_some(),
            TokenKind::Unrecognized => false,
        };

        if !attached {
            trace!(token, cursor = ?self.cursor, "Dropping token with no block to attach to");
            self.dropped.push(token.to_string());
        }

        self.mark_attribute_script(attrs);
        self
    }

    fn cursor_node(&mut self, block: &str) -> Option<&mut BemNode> {
        if self.cursor.as_deref() == Some(block) {
            self.tree.get_mut(block)
        } else {
            None
        }
    }

    /// `data-<cursor>-js` anywhere in the markup flags the cursor block.
    fn mark_attribute_script(&mut self, attrs: &AttrSet) {
        let Some(cursor) = &self.cursor else {
            return;
        };
        if attrs.contains(&format!("{cursor}{SCRIPT_SUFFIX}")) {
            if let Some(node) = self.tree.get_mut(cursor) {
                node.has_script = true;
            }
        }
    }
}

/// Build the tree, discarding diagnostics.
#[must_use]
pub fn classify(classes: &ClassSet, attrs: &AttrSet, filter: &FilterConfig) -> BemTree {
    classify_detailed(classes, attrs, filter).tree
}

/// Build the tree and report what was dropped or filtered.
#[must_use]
pub fn classify_detailed(
    classes: &ClassSet,
    attrs: &AttrSet,
    filter: &FilterConfig,
) -> Classification {
    let (allowed, rejected): (Vec<&str>, Vec<&str>) =
        classes.iter().partition(|token| filter.allows(token));

    let state = allowed
        .into_iter()
        .fold(ClassifierState::default(), |state, token| state.step(token, attrs));

    Classification {
        tree: state.tree,
        dropped: state.dropped,
        filtered: rejected.len(),
    }
}
