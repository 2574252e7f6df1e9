//! Shared helpers for tree rendering

use std::path::{Component, Path, PathBuf};

/// Indentation unit for each level below the root.
pub const INDENT: &str = "│   ";

/// Marker placed before every non-root entry.
pub const BRANCH: &str = "├── ";

/// Number of separators in a root-relative path, i.e. `a` is 0 and `a/b` is 1.
pub fn depth_of(rel_path: &Path) -> usize {
    rel_path
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
        .saturating_sub(1)
}

/// Render one tree line for an entry, including the trailing newline.
pub fn tree_line(rel_path: &Path) -> String {
    let name = rel_path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{}{}{}\n", INDENT.repeat(depth_of(rel_path)), BRANCH, name)
}

/// Get the name of a path, defaulting to the path itself (e.g. "." for the
/// current directory).
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

/// Relative path of `path` under `root`, or `path` itself if it is not below it.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Language label for a fenced block: the extension without its dot.
pub fn language_label(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default()
}
