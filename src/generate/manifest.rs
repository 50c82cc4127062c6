//! Shared script manifest: one `import` line per scripted block.

use std::path::Path;

use tracing::debug;

use crate::error::{BemError, Result};
use crate::utils::Workspace;
use crate::utils::fs::{ensure_dir, read_optional};
use crate::utils::paths::LINE_ENDING;

/// `import '<specifier>';`
#[must_use]
pub fn import_line(specifier: &str) -> String {
    format!("import '{specifier}';")
}

/// Lines from `queued` not already present in `existing`, in queue order
/// and without repeats. Membership is exact line text.
#[must_use]
pub fn missing_lines<'a>(existing: &str, queued: &'a [String]) -> Vec<&'a str> {
    let mut missing: Vec<&str> = Vec::new();
    for line in queued {
        let line = line.as_str();
        let present = existing.lines().any(|l| l.trim_end_matches('\r') == line);
        if !present && !missing.contains(&line) {
            missing.push(line);
        }
    }
    missing
}

/// `existing` with `lines` appended, one per native line break.
#[must_use]
pub fn append_lines(existing: &str, lines: &[&str]) -> String {
    let mut merged = existing.to_string();
    if !merged.is_empty() && !merged.ends_with('\n') {
        merged.push_str(LINE_ENDING);
    }
    for line in lines {
        merged.push_str(line);
        merged.push_str(LINE_ENDING);
    }
    merged
}

/// Read-modify-write of the manifest at `path`. Returns the lines added.
///
/// A missing manifest counts as empty and its directory is created. Nothing
/// is written when every queued line is already present.
pub fn update_manifest(ws: &dyn Workspace, path: &Path, queued: &[String]) -> Result<Vec<String>> {
    let existing = match read_optional(ws, path)? {
        Some(text) => text,
        None => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_dir(ws, parent).map_err(|err| match err {
                    BemError::Io(source) => BemError::CreateDir {
                        path: parent.to_path_buf(),
                        source,
                    },
                    other => other,
                })?;
            }
            String::new()
        }
    };

    let missing = missing_lines(&existing, queued);
    if missing.is_empty() {
        debug!(path = %path.display(), "Script manifest already up to date");
        return Ok(Vec::new());
    }

    ws.write(path, &append_lines(&existing, &missing))
        .map_err(|source| BemError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(missing.into_iter().map(str::to_string).collect())
}
