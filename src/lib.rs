//! Apex - walk a project, honour its ignore rules, and write the tree plus
//! every file's contents into one Markdown or JSON document

pub mod config;
pub mod content;
pub mod error;
pub mod output;
pub mod progress;
pub mod run;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, OutputFormat, parse_file_size};
pub use content::{ContentAggregator, FileRecord};
pub use error::{ApexError, Result};
pub use output::{render_document, write_document};
pub use progress::Progress;
pub use run::{RunSummary, run};
pub use tree::{PatternMatcher, TreeWalker, Visit, Walk};
