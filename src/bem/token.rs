//! Classification of a single class token by its BEM delimiters.

use serde::Serialize;

/// Separator between a block (or element) and its modifier.
pub const MOD_SEPARATOR: char = '_';
/// Separator between a block and its element.
pub const ELEM_SEPARATOR: &str = "__";
/// Suffix that marks a block as needing a script stub.
pub const SCRIPT_SUFFIX: &str = "-js";

/// What a token declares, derived from its spelling alone.
///
/// Parsing never looks at surrounding tokens; attaching a derivative to a
/// block is the classifier's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenKind {
    /// `block`
    Block { name: String },
    /// `block_mod`
    Modifier { block: String, modifier: String },
    /// `block__elem`
    Element { block: String, element: String },
    /// `block__elem_mod`
    ElementModifier {
        block: String,
        element: String,
        modifier: String,
    },
    /// `block-js`
    ScriptMarker { block: String },
    /// Anything with more separators than the shapes above, or an empty part.
    Unrecognized,
}

impl TokenKind {
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token.is_empty() {
            return Self::Unrecognized;
        }

        if let Some((block, rest)) = token.split_once(ELEM_SEPARATOR) {
            return Self::parse_element(block, rest);
        }

        let mut parts = token.split(MOD_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), None, None) => Self::parse_bare(name),
            (Some(block), Some(modifier), None) if !block.is_empty() && !modifier.is_empty() => {
                Self::Modifier {
                    block: block.to_string(),
                    modifier: modifier.to_string(),
                }
            }
            _ => Self::Unrecognized,
        }
    }

    fn parse_bare(name: &str) -> Self {
        match name.strip_suffix(SCRIPT_SUFFIX) {
            Some(block) if !block.is_empty() => Self::ScriptMarker {
                block: block.to_string(),
            },
            Some(_) => Self::Unrecognized,
            None => Self::Block {
                name: name.to_string(),
            },
        }
    }

    fn parse_element(block: &str, rest: &str) -> Self {
        if block.is_empty() || block.contains(MOD_SEPARATOR) {
            return Self::Unrecognized;
        }
        let mut parts = rest.split(MOD_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), None, None) if !element.is_empty() => Self::Element {
                block: block.to_string(),
                element: element.to_string(),
            },
            (Some(element), Some(modifier), None) if !element.is_empty() && !modifier.is_empty() => {
                Self::ElementModifier {
                    block: block.to_string(),
                    element: element.to_string(),
                    modifier: modifier.to_string(),
                }
            }
            _ => Self::Unrecognized,
        }
    }

}

/// Part of a token before its first `_`, used as the primary sort key.
#[must_use]
pub fn block_prefix(token: &str) -> &str {
    token
        .split_once(MOD_SEPARATOR)
        .map_or(token, |(prefix, _)| prefix)
}
