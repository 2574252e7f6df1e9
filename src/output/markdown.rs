//! Markdown output formatting
//!
//! `MarkdownFormatter` renders the tree in a fenced block followed by one
//! section per file, each fenced and tagged with the file's extension.

use crate::content::FileRecord;

/// Builds the Markdown document in memory.
#[derive(Debug, Default)]
pub struct MarkdownFormatter {
    output: Vec<u8>,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading plus the tree text in a bare fence.
    pub fn tree(&mut self, tree: &str) -> &mut Self {
        self.push("# Project Structure\n\n");
        self.push("```\n");
        self.push(tree);
        if !tree.is_empty() && !tree.ends_with('\n') {
            self.push("\n");
        }
        self.push("```\n\n");
        self
    }

    /// Heading that opens the content section.
    pub fn contents_heading(&mut self) -> &mut Self {
        self.push("# File Contents\n\n");
        self
    }

    /// One self-contained block for a file: separator, path heading, fenced body.
    pub fn record(&mut self, record: &FileRecord) -> &mut Self {
        self.push("---\n\n### `");
        self.push(&record.rel_path);
        self.push("`\n\n");

        match &record.content {
            Ok(bytes) => {
                self.push("```");
                self.push(&record.language());
                self.push("\n");
                self.output.extend_from_slice(bytes);
                self.push("\n```\n\n");
            }
            Err(e) => {
                self.push("```\nError reading file: ");
                self.push(&e.to_string());
                self.push("\n```\n\n");
            }
        }
        self
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Take ownership of the rendered bytes.
    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    fn push(&mut self, s: &str) {
        self.output.extend_from_slice(s.as_bytes());
    }
}

/// Render a full Markdown document. `records` is `None` in tree-only mode.
pub fn render_markdown(tree: &str, records: Option<&[FileRecord]>) -> Vec<u8> {
    let mut formatter = MarkdownFormatter::new();
    formatter.tree(tree);
    if let Some(records) = records {
        formatter.contents_heading();
        for record in records {
            formatter.record(record);
        }
    }
    formatter.into_output()
}
