//! Markup discovery from the `from` glob pattern.
//!
//! `glob` has no alternation, so `(a|b)` groups, the extglob forms `@(..)`,
//! `+(..)`, `?(..)`, `*(..)` and `!(..)`, and `{a,b}` braces are expanded into
//! separate patterns first. `%` stands in for `|` so several alternatives fit
//! in one `key=value` argument.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::{BemError, Result};

const EXTGLOB_MARKERS: [char; 5] = ['@', '+', '?', '*', '!'];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One plain glob plus the globs whose matches it leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub include: String,
    pub exclude: Vec<String>,
}

impl Alternative {
    fn plain(pattern: &str) -> Self {
        Self {
            include: pattern.to_string(),
            exclude: Vec::new(),
        }
    }
}

/// Files under `cwd` matching `pattern`, as sorted `cwd`-relative paths.
///
/// An invalid alternative is logged and skipped. The call only fails when
/// every alternative is invalid.
pub fn find_sources(cwd: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&cwd.to_string_lossy());

    let alternatives = expand_alternatives(&pattern.replace('%', "|"));
    let mut found = BTreeSet::new();
    let mut last_error = None;
    let mut valid = 0usize;

    for alternative in &alternatives {
        let relative = strip_dot(&alternative.include);
        let full = if base.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{relative}", base.trim_end_matches('/'))
        };

        let compiled = glob::glob_with(&full, MATCH_OPTIONS).and_then(|paths| {
            let excluded = alternative
                .exclude
                .iter()
                .map(|p| Pattern::new(strip_dot(p)))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok((paths, excluded))
        });
        let (paths, excluded) = match compiled {
            Ok(compiled) => compiled,
            Err(err) => {
                warn!(pattern = %alternative.include, error = %err, "Skipping invalid glob pattern");
                last_error = Some(BemError::Pattern {
                    pattern: alternative.include.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        valid += 1;

        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => {
                    let relative = path.strip_prefix(cwd).map_or_else(|_| path.clone(), Path::to_path_buf);
                    if excluded.iter().any(|p| p.matches_path_with(&relative, MATCH_OPTIONS)) {
                        debug!(path = %relative.display(), "Excluded by negated group");
                        continue;
                    }
                    found.insert(relative);
                }
                Ok(_) => {}
                Err(err) => warn!(path = %err.path().display(), error = %err, "Cannot inspect path"),
            }
        }
    }

    if valid == 0 {
        if let Some(err) = last_error {
            return Err(err);
        }
    }

    debug!(pattern, files = found.len(), "Resolved markup sources");
    Ok(found.into_iter().collect())
}

fn strip_dot(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

/// Expand every alternation group into plain glob patterns.
///
/// `?(..)` and `*(..)` also allow the empty alternative. Repetition is not
/// expanded: `+(..)` and `*(..)` match at most one occurrence. `!(..)` becomes
/// `*` with each named alternative excluded.
#[must_use]
pub fn expand_alternatives(pattern: &str) -> Vec<Alternative> {
    let top_level = split_top_level(pattern, '|');
    if top_level.len() > 1 {
        return top_level.into_iter().flat_map(expand_alternatives).collect();
    }

    let Some((start, end, open)) = find_group(pattern) else {
        return vec![Alternative::plain(pattern)];
    };

    let inner = &pattern[start + 1..end];
    let suffix = &pattern[end + 1..];
    if open == '{' {
        let prefix = &pattern[..start];
        return split_top_level(inner, ',')
            .into_iter()
            .flat_map(|choice| expand_alternatives(&format!("{prefix}{choice}{suffix}")))
            .collect();
    }

    let (prefix, marker) = match pattern[..start].char_indices().next_back() {
        Some((idx, c)) if EXTGLOB_MARKERS.contains(&c) => (&pattern[..idx], Some(c)),
        _ => (&pattern[..start], None),
    };
    let mut choices = split_top_level(inner, '|');
    match marker {
        Some('!') => return negated(prefix, &choices, suffix),
        Some('?' | '*') => choices.push(""),
        _ => {}
    }

    choices
        .into_iter()
        .flat_map(|choice| expand_alternatives(&format!("{prefix}{choice}{suffix}")))
        .collect()
}

fn negated(prefix: &str, choices: &[&str], suffix: &str) -> Vec<Alternative> {
    let excluded: Vec<String> = choices
        .iter()
        .flat_map(|choice| expand_alternatives(&format!("{prefix}{choice}{suffix}")))
        .map(|alternative| alternative.include)
        .collect();

    expand_alternatives(&format!("{prefix}*{suffix}"))
        .into_iter()
        .map(|mut alternative| {
            alternative.exclude.extend(excluded.iter().cloned());
            alternative
        })
        .collect()
}

/// Byte range and opening char of the first `(...)` or `{...}` group outside
/// a `[...]` class.
fn find_group(pattern: &str) -> Option<(usize, usize, char)> {
    let mut in_class = false;
    let mut open: Option<(usize, char)> = None;
    let mut depth = 0usize;

    for (idx, ch) in pattern.char_indices() {
        match (ch, open) {
            ('[', None) => in_class = true,
            (']', None) if in_class => in_class = false,
            ('(' | '{', None) if !in_class => {
                open = Some((idx, ch));
                depth = 1;
            }
            ('(' | '{', Some((_, kind))) if ch == kind => depth += 1,
            (')', Some((start, '('))) | ('}', Some((start, '{'))) => {
                depth -= 1;
                if depth == 0 {
                    return open.map(|(_, kind)| (start, idx, kind));
                }
            }
            _ => {}
        }
    }
    None
}

fn split_top_level(inner: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '(' | '{' => depth += 1,
            ')' | '}' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&inner[last..idx]);
                last = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&inner[last..]);
    parts
}
