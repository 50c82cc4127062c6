//! Path helpers for generated output.

use std::path::{Component, Path, PathBuf};

/// Native line break used for files shared with other tools (the script manifest).
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Drop `.` components and fold `..` against preceding normal components.
///
/// Purely lexical; symlinks are not resolved.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Module specifier for `target` as seen from a file living in `from_dir`.
///
/// Always uses `/` and starts with `./` or `../`, the way ES module imports
/// expect it.
#[must_use]
pub fn import_specifier(from_dir: &Path, target: &Path) -> String {
    let from_dir = normalize(from_dir);
    let target = normalize(target);
    let relative = pathdiff::diff_paths(&target, &from_dir).unwrap_or(target);

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if joined.starts_with("../") {
        joined
    } else {
        format!("./{joined}")
    }
}
