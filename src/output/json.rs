//! JSON output formatting

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::FileRecord;
use crate::error::Result;

/// Structured document: the tree plus, unless tree-only, path -> content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDocument {
    pub project_tree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_contents: Option<BTreeMap<String, String>>,
}

impl JsonDocument {
    pub fn new(tree: &str, records: Option<&[FileRecord]>) -> Self {
        Self {
            project_tree: tree.to_string(),
            file_contents: records.map(|records| {
                records
                    .iter()
                    .map(|r| (r.rel_path.clone(), r.text()))
                    .collect()
            }),
        }
    }
}

/// Render the document as pretty-printed JSON.
pub fn render_json(tree: &str, records: Option<&[FileRecord]>) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&JsonDocument::new(tree, records))?)
}
