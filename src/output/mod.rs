//! Document rendering and emission
//!
//! The final document is rendered completely in memory and then written to
//! disk in one go, so a failed run never leaves a half-written file.
//!
//! # Module Structure
//!
//! - `markdown` - tree block plus one fenced block per file
//! - `json` - `projectTree` / `fileContents` object

mod json;
mod markdown;

use std::fs;
use std::path::Path;

pub use json::{JsonDocument, render_json};
pub use markdown::{MarkdownFormatter, render_markdown};

use crate::config::OutputFormat;
use crate::content::FileRecord;
use crate::error::{ApexError, Result};

/// Render the document. `records` is `None` in tree-only mode.
pub fn render_document(
    format: OutputFormat,
    tree: &str,
    records: Option<&[FileRecord]>,
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(tree, records)),
        OutputFormat::Json => render_json(tree, records),
    }
}

/// Render and write the document to `path`.
pub fn write_document(
    path: &Path,
    format: OutputFormat,
    tree: &str,
    records: Option<&[FileRecord]>,
) -> Result<()> {
    let bytes = render_document(format, tree, records)?;
    fs::write(path, &bytes).map_err(|source| ApexError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), %format, "document written");
    Ok(())
}
