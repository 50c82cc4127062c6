//! `use` / `omit` prefix filtering.

use serde::Serialize;

/// Inclusion and exclusion prefix lists.
///
/// Empty lists impose no constraint, so a missing or blank pattern matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl FilterConfig {
    /// Build from the comma-separated `use` and `omit` option values.
    #[must_use]
    pub fn new(use_pattern: &str, omit_pattern: &str) -> Self {
        Self {
            include: split_prefixes(use_pattern),
            exclude: split_prefixes(omit_pattern),
        }
    }

    #[must_use]
    pub fn allows(&self, token: &str) -> bool {
        let included =
            self.include.is_empty() || self.include.iter().any(|p| token.starts_with(p.as_str()));
        included && !self.exclude.iter().any(|p| token.starts_with(p.as_str()))
    }

    #[must_use]
    pub fn include(&self) -> &[String] {
        &self.include
    }

    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }
}

fn split_prefixes(pattern: &str) -> Vec<String> {
    pattern
        .split(',')
        .map(|entry| entry.split_whitespace().collect::<String>())
        .filter(|entry| !entry.is_empty())
        .collect()
}
