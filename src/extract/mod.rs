//! Class and `data-` attribute extraction from markup files.
//!
//! Only attribute values are looked at; the markup is never parsed.

pub mod sources;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::bem::token::block_prefix;
use crate::error::{BemError, Failure};
use crate::utils::Workspace;

pub use sources::find_sources;

/// `class="..."` or `class='...'`, attribute name in any case.
static CLASS_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)class=(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// `data-<name>` attribute names.
static DATA_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data-([\w-]+)").unwrap());

/// Distinct class tokens in classification order.
///
/// Tokens are grouped by the part before their first `_`, groups in
/// lexicographic order, and a bare block name leads its own group. Inside a
/// group tokens keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassSet {
    tokens: Vec<String>,
}

impl ClassSet {
    /// Deduplicate and order raw tokens.
    pub fn from_tokens(tokens: impl IntoIterator<Item = String>) -> Self {
        let mut tokens: Vec<String> = tokens.into_iter().collect::<IndexSet<_>>().into_iter().collect();
        tokens.sort_by(|a, b| {
            block_prefix(a)
                .cmp(block_prefix(b))
                .then_with(|| is_derived(a).cmp(&is_derived(b)))
        });
        Self { tokens }
    }

    /// Deduplicate but keep the given order. Used to replay a specific
    /// ordering through the classifier.
    pub fn from_ordered(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect::<IndexSet<_>>().into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn is_derived(token: &str) -> bool {
    block_prefix(token) != token
}

/// Distinct `data-` attribute names, stored without the `data-` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttrSet {
    names: BTreeSet<String>,
}

impl AttrSet {
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything pulled out of one scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub classes: ClassSet,
    pub attrs: AttrSet,
    pub files_read: usize,
    pub failures: Vec<Failure>,
}

/// Whitespace-separated tokens of every class attribute, in document order.
#[must_use]
pub fn extract_class_tokens(text: &str) -> Vec<String> {
    CLASS_ATTR_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .flat_map(|value| value.as_str().split_whitespace())
        .map(str::to_string)
        .collect()
}

/// Names of every `data-` attribute, without the prefix.
#[must_use]
pub fn extract_data_attributes(text: &str) -> Vec<String> {
    DATA_ATTR_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Read every file (relative to `cwd`) and merge what it references.
///
/// A file that cannot be read is logged and recorded; the rest are still
/// scanned.
pub fn collect(files: &[PathBuf], cwd: &Path, ws: &dyn Workspace) -> Extraction {
    let mut tokens = Vec::new();
    let mut attrs = Vec::new();
    let mut files_read = 0;
    let mut failures = Vec::new();

    for file in files {
        let path = cwd.join(file);
        match ws.read_to_string(&path) {
            Ok(text) => {
                let found = extract_class_tokens(&text);
                debug!(path = %path.display(), tokens = found.len(), "Scanned markup");
                tokens.extend(found);
                attrs.extend(extract_data_attributes(&text));
                files_read += 1;
            }
            Err(source) => {
                let err = BemError::ReadSource {
                    path: path.clone(),
                    source,
                };
                warn!(path = %path.display(), error = %err, "Skipping unreadable markup file");
                failures.push(Failure::new(path, &err));
            }
        }
    }

    Extraction {
        classes: ClassSet::from_tokens(tokens),
        attrs: AttrSet::from_names(attrs),
        files_read,
        failures,
    }
}
