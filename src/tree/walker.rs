//! TreeWalker - one pre-order pass producing the file list and tree text

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ApexError, Result};
use crate::progress::Progress;

use super::filter::{PatternMatcher, Verdict};
use super::utils::{relative_to, root_name, tree_line};

/// A filesystem node seen during traversal. Lives only for one visit.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    /// Path relative to the walk root.
    pub rel_path: PathBuf,
    pub is_dir: bool,
    /// Byte size, only looked up for files when a size ceiling is active.
    pub size: Option<u64>,
}

/// What the walker does with an entry after consulting the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Render it and, for directories, descend.
    Continue,
    /// Leave this entry out; carry on with its siblings.
    Skip,
    /// Leave this directory and everything under it out, without reading it.
    Prune,
}

/// Result of a complete walk.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    /// Accepted files in traversal order.
    pub files: Vec<PathBuf>,
    /// Rendered tree, one line per accepted entry, root first.
    pub tree: String,
    /// Accepted directories, not counting the root.
    pub dir_count: usize,
    pub file_count: usize,
}

/// Single-threaded depth-first walker.
///
/// Entries are visited in name order within each directory and that order is
/// shared by the tree text and the file list.
pub struct TreeWalker {
    matcher: PatternMatcher,
    progress: Progress,
}

impl TreeWalker {
    pub fn new(matcher: PatternMatcher, progress: Progress) -> Self {
        Self { matcher, progress }
    }

    /// Build the matcher described by `config` and wrap it in a walker.
    pub fn from_config(config: &Config, progress: Progress) -> Result<Self> {
        Ok(Self::new(PatternMatcher::from_config(config, progress)?, progress))
    }

    /// Walk `root`. Any I/O error while listing a directory aborts the whole
    /// walk; no partial result is returned.
    pub fn walk(&self, root: &Path) -> Result<Walk> {
        let mut walk = Walk::default();

        // The root is always rendered and never matched
        let name = root_name(root);
        walk.tree.push_str(&name);
        walk.tree.push('\n');
        self.progress.scan_root(&name);

        self.walk_dir(root, root, &mut walk)?;
        Ok(walk)
    }

    fn walk_dir(&self, root: &Path, dir: &Path, walk: &mut Walk) -> Result<()> {
        let walk_err = |source| ApexError::Walk {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir)
            .map_err(walk_err)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(walk_err)?;
        entries.sort_by_key(|e| e.file_name());

        for dir_entry in entries {
            let file_type = dir_entry.file_type().map_err(walk_err)?;
            let path = dir_entry.path();
            let rel_path = relative_to(&path, root);
            let is_dir = file_type.is_dir();
            let size = if !is_dir && self.matcher.limits_size() {
                Some(dir_entry.metadata().map_err(walk_err)?.len())
            } else {
                None
            };

            let entry = Entry {
                path,
                rel_path,
                is_dir,
                size,
            };

            match self.visit(&entry) {
                Visit::Prune | Visit::Skip => continue,
                Visit::Continue => {}
            }

            walk.tree.push_str(&tree_line(&entry.rel_path));
            if entry.is_dir {
                walk.dir_count += 1;
                self.progress.scan_dir(&entry.rel_path);
                self.walk_dir(root, &entry.path, walk)?;
            } else {
                walk.file_count += 1;
                self.progress.scan_file(&entry.rel_path);
                walk.files.push(entry.path);
            }
        }

        Ok(())
    }

    /// Decide what to do with an entry.
    pub fn visit(&self, entry: &Entry) -> Visit {
        match self
            .matcher
            .verdict(&entry.rel_path, entry.is_dir, entry.size)
        {
            Verdict::Keep => Visit::Continue,
            Verdict::Ignored if entry.is_dir => {
                tracing::debug!(path = %entry.rel_path.display(), "pruned");
                Visit::Prune
            }
            Verdict::Ignored | Verdict::NotIncluded => {
                tracing::debug!(path = %entry.rel_path.display(), "skipped");
                Visit::Skip
            }
            Verdict::TooLarge => {
                tracing::debug!(
                    path = %entry.rel_path.display(),
                    size = entry.size,
                    "skipped, over size limit"
                );
                self.progress.scan_too_large(&entry.rel_path);
                Visit::Skip
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn walker(root: &Path, rules: &[&str]) -> TreeWalker {
        let matcher = PatternMatcher::from_rules(root, rules, &[], 0).unwrap();
        TreeWalker::new(matcher, Progress::silent())
    }

    fn rel_files(walk: &Walk, root: &Path) -> Vec<String> {
        walk.files
            .iter()
            .map(|p| relative_to(p, root).to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_walk_renders_root_then_entries() {
        let dir = TestDir::new();
        dir.add_file("a.go", "package a");
        dir.add_file("src/b.go", "package b");

        let walk = walker(dir.path(), &[]).walk(dir.path()).unwrap();
        let root = root_name(dir.path());

        assert_eq!(
            walk.tree,
            format!("{}\n├── a.go\n├── src\n│   ├── b.go\n", root)
        );
        assert_eq!(rel_files(&walk, dir.path()), vec!["a.go", "src/b.go"]);
        assert_eq!(walk.dir_count, 1);
        assert_eq!(walk.file_count, 2);
    }

    #[test]
    fn test_walk_is_preorder_in_name_order() {
        let dir = TestDir::new();
        dir.add_file("b/z.txt", "");
        dir.add_file("b/a.txt", "");
        dir.add_file("a/m.txt", "");
        dir.add_file("c.txt", "");

        let walk = walker(dir.path(), &[]).walk(dir.path()).unwrap();
        let lines: Vec<&str> = walk.tree.lines().skip(1).collect();

        assert_eq!(
            lines,
            vec![
                "├── a",
                "│   ├── m.txt",
                "├── b",
                "│   ├── a.txt",
                "│   ├── z.txt",
                "├── c.txt",
            ]
        );
        assert_eq!(
            rel_files(&walk, dir.path()),
            vec!["a/m.txt", "b/a.txt", "b/z.txt", "c.txt"]
        );
    }

    #[test]
    fn test_pruned_directory_hides_whole_subtree() {
        let dir = TestDir::new();
        dir.add_file("a.go", "package a");
        dir.add_file("vendor/b.go", "package b");
        dir.add_file("vendor/deep/keep.go", "package keep");

        // A negation for a descendant cannot resurrect anything under a pruned dir
        let walk = walker(dir.path(), &["vendor/", "!vendor/deep/keep.go"])
            .walk(dir.path())
            .unwrap();

        assert!(!walk.tree.contains("vendor"));
        assert!(!walk.tree.contains("b.go"));
        assert!(!walk.tree.contains("keep.go"));
        assert_eq!(rel_files(&walk, dir.path()), vec!["a.go"]);
    }

    #[test]
    fn test_ignored_file_is_skipped_but_siblings_kept() {
        let dir = TestDir::new();
        dir.add_file("debug.log", "noise");
        dir.add_file("main.rs", "fn main() {}");

        let walk = walker(dir.path(), &["*.log"]).walk(dir.path()).unwrap();
        assert!(!walk.tree.contains("debug.log"));
        assert_eq!(rel_files(&walk, dir.path()), vec!["main.rs"]);
    }

    #[test]
    fn test_include_allowlist_keeps_directories() {
        let dir = TestDir::new();
        dir.add_file("README.md", "# readme");
        dir.add_file("cmd/root.go", "package cmd");
        dir.add_file("docs/guide.md", "guide");

        let include = vec!["*.go".to_string()];
        let matcher =
            PatternMatcher::from_rules(dir.path(), &[] as &[&str], &include, 0).unwrap();
        let walk = TreeWalker::new(matcher, Progress::silent())
            .walk(dir.path())
            .unwrap();

        assert_eq!(rel_files(&walk, dir.path()), vec!["cmd/root.go"]);
        // Directories stay in the tree even when nothing inside them survives
        assert!(walk.tree.contains("├── docs\n"));
        assert!(!walk.tree.contains("guide.md"));
        assert!(!walk.tree.contains("README.md"));
    }

    #[test]
    fn test_size_ceiling_excludes_large_files() {
        let dir = TestDir::new();
        dir.add_file("small.txt", "tiny");
        dir.add_file("large.txt", &"x".repeat(100));

        let matcher = PatternMatcher::from_rules(dir.path(), &[] as &[&str], &[], 10).unwrap();
        let walk = TreeWalker::new(matcher, Progress::silent())
            .walk(dir.path())
            .unwrap();

        assert_eq!(rel_files(&walk, dir.path()), vec!["small.txt"]);
        assert!(!walk.tree.contains("large.txt"));
    }

    #[test]
    fn test_missing_root_is_walk_error() {
        let dir = TestDir::new();
        let missing = dir.path().join("nope");

        let err = walker(dir.path(), &[]).walk(&missing).unwrap_err();
        assert!(matches!(err, ApexError::Walk { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_visit_decisions() {
        let dir = TestDir::new();
        let w = walker(dir.path(), &["target/", "*.tmp"]);
        let entry = |rel: &str, is_dir: bool| Entry {
            path: dir.path().join(rel),
            rel_path: PathBuf::from(rel),
            is_dir,
            size: None,
        };

        assert_eq!(w.visit(&entry("target", true)), Visit::Prune);
        assert_eq!(w.visit(&entry("x.tmp", false)), Visit::Skip);
        assert_eq!(w.visit(&entry("src", true)), Visit::Continue);
        assert_eq!(w.visit(&entry("src/lib.rs", false)), Visit::Continue);
    }
}
