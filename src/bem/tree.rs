//! Block → Element → Modifier tree.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Modifiers attached to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElemNode {
    pub mods: IndexSet<String>,
}

/// Everything discovered under one block name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BemNode {
    pub mods: IndexSet<String>,
    pub elems: IndexMap<String, ElemNode>,
    #[serde(rename = "hasScript")]
    pub has_script: bool,
}

impl BemNode {
    /// Get or create `element`. A repeat sighting keeps its modifiers.
    pub fn element_mut(&mut self, element: &str) -> &mut ElemNode {
        self.elems.entry(element.to_string()).or_default()
    }
}

/// Blocks in the order they were first declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BemTree {
    blocks: IndexMap<String, BemNode>,
}

impl BemTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh node for `name`.
    ///
    /// Redeclaring a name replaces its node but keeps its original position.
    pub fn declare(&mut self, name: &str) -> &mut BemNode {
        self.blocks.insert(name.to_string(), BemNode::default());
        &mut self.blocks[name]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BemNode> {
        self.blocks.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut BemNode> {
        self.blocks.get_mut(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BemNode)> {
        self.blocks.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks flagged for a script stub.
    #[must_use]
    pub fn scripted_count(&self) -> usize {
        self.blocks.values().filter(|node| node.has_script).count()
    }
}
