//! Ignore-rule, include-allowlist and size filtering for tree walking

use std::fs;
use std::io;
use std::path::Path;

use glob::Pattern;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::Config;
use crate::error::{ApexError, Result};
use crate::progress::Progress;

/// Outcome of checking one entry against the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Matched an ignore rule. For directories this means prune.
    Ignored,
    /// File whose base name matches no include pattern.
    NotIncluded,
    /// File larger than the configured ceiling.
    TooLarge,
}

/// Decides which entries the walker keeps.
///
/// Rules are gitignore-style and evaluated last-match-wins, so the
/// supplemental patterns (added after the ignore file) override it.
#[derive(Debug)]
pub struct PatternMatcher {
    ignore: Gitignore,
    include: Vec<Pattern>,
    max_file_size: u64,
}

impl PatternMatcher {
    /// Build the matcher from the ignore file named in `config` plus its
    /// supplemental patterns. A missing ignore file is not an error.
    pub fn from_config(config: &Config, progress: Progress) -> Result<Self> {
        let ignore_path = config.ignore_file_path();
        let mut builder = GitignoreBuilder::new(&config.root);

        match fs::read_to_string(&ignore_path) {
            Ok(contents) => {
                for line in contents.lines() {
                    builder.add_line(Some(ignore_path.clone()), line)?;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %ignore_path.display(), "ignore file not found");
                progress.ignore_file_missing(&config.ignore_file);
            }
            Err(source) => {
                return Err(ApexError::IgnoreFile {
                    path: ignore_path,
                    source,
                });
            }
        }

        for pattern in config.supplemental_patterns() {
            builder.add_line(None, &pattern)?;
        }

        Ok(Self {
            ignore: builder.build()?,
            include: compile_include(&config.include_patterns)?,
            max_file_size: config.max_file_size,
        })
    }

    /// Build a matcher from in-memory rules, in precedence order.
    pub fn from_rules<S: AsRef<str>>(
        root: &Path,
        rules: &[S],
        include_patterns: &[String],
        max_file_size: u64,
    ) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for rule in rules {
            builder.add_line(None, rule.as_ref())?;
        }
        Ok(Self {
            ignore: builder.build()?,
            include: compile_include(include_patterns)?,
            max_file_size,
        })
    }

    /// Whether the size ceiling is active, i.e. callers need to supply sizes.
    pub fn limits_size(&self) -> bool {
        self.max_file_size > 0
    }

    /// Check an entry. `rel_path` is relative to the walk root; `size` is only
    /// consulted for files and may be `None` when it is unknown.
    pub fn verdict(&self, rel_path: &Path, is_dir: bool, size: Option<u64>) -> Verdict {
        // The ignore crate strips its root as a byte prefix, so hand it the
        // root-joined path; a bare relative path can collide with a relative
        // root ("app" vs "application/...").
        let candidate = self.ignore.path().join(rel_path);
        if self.ignore.matched(&candidate, is_dir).is_ignore() {
            return Verdict::Ignored;
        }
        if is_dir {
            return Verdict::Keep;
        }
        if !self.include.is_empty() && !self.is_included(rel_path) {
            return Verdict::NotIncluded;
        }
        if self.limits_size() && size.is_some_and(|s| s > self.max_file_size) {
            return Verdict::TooLarge;
        }
        Verdict::Keep
    }

    pub fn should_skip(&self, rel_path: &Path, is_dir: bool, size: Option<u64>) -> bool {
        self.verdict(rel_path, is_dir, size) != Verdict::Keep
    }

    fn is_included(&self, rel_path: &Path) -> bool {
        let name = rel_path
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.include.iter().any(|p| p.matches(&name))
    }
}

fn compile_include(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ApexError::IncludePattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}
