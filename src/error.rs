//! Error types for fatal failures
//!
//! Anything in here aborts the run. Per-file read failures during content
//! aggregation are not errors at this level; they are carried inside
//! [`FileRecord`](crate::content::FileRecord) and rendered inline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApexError {
    /// Output format name is not one of `markdown` or `json`.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The ignore file exists but could not be read.
    #[error("failed to read ignore file '{}': {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line from the ignore file or an extra ignore pattern is not a valid glob.
    #[error("invalid ignore pattern: {0}")]
    IgnorePattern(#[from] ignore::Error),

    #[error("invalid include pattern '{pattern}': {source}")]
    IncludePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid size '{0}'")]
    InvalidSize(String),

    /// A directory could not be listed mid-walk. The whole walk is abandoned.
    #[error("failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode JSON output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start reader pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ApexError>;
