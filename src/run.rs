//! End-to-end pipeline: match, walk, read, emit

use std::path::PathBuf;

use crate::config::Config;
use crate::content::ContentAggregator;
use crate::error::Result;
use crate::output::write_document;
use crate::progress::Progress;
use crate::tree::TreeWalker;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub dir_count: usize,
    pub file_count: usize,
    /// Files whose content could not be read and were written as error notices.
    pub unreadable: usize,
}

/// Run the whole tool for `config`.
///
/// Every fatal error surfaces before the output file is created: the walk and
/// all reads complete first and the document is written in one call.
pub fn run(config: &Config) -> Result<RunSummary> {
    let progress = Progress::new(config.quiet);
    progress.start(&config.root);

    let walker = TreeWalker::from_config(config, progress)?;

    progress.scanning();
    let walk = walker.walk(&config.root)?;
    progress.scan_summary(walk.dir_count, walk.file_count);

    let records = if config.tree_only {
        None
    } else {
        progress.reading();
        Some(ContentAggregator::from_config(config, progress).aggregate(&walk.files)?)
    };
    let unreadable = records
        .as_ref()
        .map_or(0, |r| r.iter().filter(|r| r.is_err()).count());

    progress.writing(&config.output_path, config.tree_only);
    write_document(
        &config.output_path,
        config.format,
        &walk.tree,
        records.as_deref(),
    )?;
    progress.success(&config.output_path, &config.format.to_string());

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        dir_count: walk.dir_count,
        file_count: walk.file_count,
        unreadable,
    })
}
