//! Run configuration
//!
//! A [`Config`] is assembled once from the command line and then only ever
//! borrowed. Each component copies out the fields it needs when it is built.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ApexError, Result};

/// Base name of the output file when `--output` is not given.
pub const DEFAULT_OUTPUT_STEM: &str = "project_structure";

/// Ignore file looked up under the root directory by default.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Version-control metadata directory, never walked.
pub const VCS_DIR: &str = ".git";

/// Document representation written by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// `project_structure.md` or `project_structure.json`.
    pub fn default_output_path(self) -> PathBuf {
        PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, self.extension()))
    }
}

impl FromStr for OutputFormat {
    type Err = ApexError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApexError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => f.write_str("markdown"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to document.
    pub root: PathBuf,
    pub output_path: PathBuf,
    /// Ignore file, relative to `root` unless absolute.
    pub ignore_file: PathBuf,
    /// Patterns applied after the ignore file.
    pub extra_ignores: Vec<String>,
    /// Base-name globs; when non-empty only matching files are kept.
    pub include_patterns: Vec<String>,
    pub tree_only: bool,
    pub format: OutputFormat,
    /// Largest file size in bytes to keep. 0 = unlimited.
    pub max_file_size: u64,
    pub quiet: bool,
    /// Number of reader threads.
    /// 0 = one per logical CPU
    pub jobs: usize,
}

impl Config {
    /// Configuration for `root` with every other setting at its default.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let format = OutputFormat::default();
        Self {
            root: root.into(),
            output_path: format.default_output_path(),
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            extra_ignores: Vec::new(),
            include_patterns: Vec::new(),
            tree_only: false,
            format,
            max_file_size: 0,
            quiet: false,
            jobs: 0,
        }
    }

    /// Full path of the ignore file.
    pub fn ignore_file_path(&self) -> PathBuf {
        self.root.join(&self.ignore_file)
    }

    /// Patterns layered after the ignore file: the extra ignores, then the
    /// tool's own output file and the VCS directory. Last match wins, so the
    /// final two beat any earlier negation.
    pub fn supplemental_patterns(&self) -> Vec<String> {
        let mut patterns = self.extra_ignores.clone();
        patterns.push(self.output_pattern());
        patterns.push(VCS_DIR.to_string());
        patterns
    }

    /// Ignore pattern for the output file. An output path under the root is
    /// anchored to it; anything else is used as written.
    fn output_pattern(&self) -> String {
        match self.output_path.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => format!("/{}", rel.to_string_lossy()),
            _ => self.output_path.to_string_lossy().into_owned(),
        }
    }
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
pub fn parse_file_size(s: &str) -> Result<u64> {
    let upper = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('K') {
        (n, 1024)
    } else {
        (upper.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| ApexError::InvalidSize(s.to_string()))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| ApexError::InvalidSize(s.to_string()))
}
