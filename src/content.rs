//! Parallel file-content aggregation
//!
//! Reads every accepted file on a rayon pool and hands back one
//! [`FileRecord`] per path. Results come back in submission order, so the
//! content section of the document lines up with the tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::progress::Progress;
use crate::tree::{language_label, relative_to};

/// Outcome of reading one accepted file.
#[derive(Debug)]
pub struct FileRecord {
    /// Path relative to the walk root, as shown in the document.
    pub rel_path: String,
    pub content: io::Result<Vec<u8>>,
}

impl FileRecord {
    /// Read `path` and label it relative to `root`. Never fails; a read error
    /// is kept in the record.
    pub fn read(path: &Path, root: &Path) -> Self {
        let rel_path = relative_to(path, root).to_string_lossy().into_owned();
        let content = fs::read(path);
        if let Err(ref e) = content {
            tracing::warn!(path = %rel_path, error = %e, "failed to read file");
        }
        Self { rel_path, content }
    }

    pub fn is_err(&self) -> bool {
        self.content.is_err()
    }

    /// Fence label derived from the file extension, empty when there is none.
    pub fn language(&self) -> String {
        language_label(Path::new(&self.rel_path))
    }

    /// Inline notice used in place of content when the read failed.
    pub fn error_notice(&self) -> Option<String> {
        self.content
            .as_ref()
            .err()
            .map(|e| format!("Error reading file: {}", e))
    }

    /// Content as text, or the error notice. Invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        match &self.content {
            Ok(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Err(e) => format!("Error reading file: {}", e),
        }
    }
}

/// Reads many files concurrently.
pub struct ContentAggregator {
    root: PathBuf,
    /// Reader threads.
    /// 0 = one per logical CPU
    jobs: usize,
    progress: Progress,
}

impl ContentAggregator {
    pub fn new(root: impl Into<PathBuf>, jobs: usize, progress: Progress) -> Self {
        Self {
            root: root.into(),
            jobs,
            progress,
        }
    }

    pub fn from_config(config: &Config, progress: Progress) -> Self {
        Self::new(&config.root, config.jobs, progress)
    }

    /// Read every path and return one record per path, in the order given.
    ///
    /// Reads run on a dedicated pool sized by `jobs`; the call returns once
    /// every worker is done. Unreadable files produce error records rather
    /// than failing the batch.
    pub fn aggregate(&self, paths: &[PathBuf]) -> Result<Vec<FileRecord>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()?;

        let root = self.root.as_path();
        let records: Vec<FileRecord> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| FileRecord::read(path, root))
                .collect()
        });

        for record in &records {
            self.progress.read(&record.rel_path);
        }

        let failed = records.iter().filter(|r| r.is_err()).count();
        tracing::debug!(total = records.len(), failed, "aggregated file contents");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_aggregate_preserves_submission_order() {
        let dir = TestDir::new();
        let paths: Vec<PathBuf> = (0..64)
            .map(|i| dir.add_file(&format!("f{:02}.txt", i), &format!("content {}", i)))
            .collect();

        let aggregator = ContentAggregator::new(dir.path(), 4, Progress::silent());
        let records = aggregator.aggregate(&paths).unwrap();

        assert_eq!(records.len(), 64);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.rel_path, format!("f{:02}.txt", i));
            assert_eq!(record.content.as_ref().unwrap(), format!("content {}", i).as_bytes());
        }
    }

    #[test]
    fn test_unreadable_file_yields_error_record() {
        let dir = TestDir::new();
        let good = dir.add_file("good.rs", "fn good() {}");
        let missing = dir.path().join("gone.rs");

        let aggregator = ContentAggregator::new(dir.path(), 0, Progress::silent());
        let records = aggregator.aggregate(&[good, missing]).unwrap();

        assert_eq!(records.len(), 2);
        assert!(!records[0].is_err());
        assert!(records[1].is_err());
        assert_eq!(records[1].rel_path, "gone.rs");
        assert!(
            records[1]
                .error_notice()
                .unwrap()
                .starts_with("Error reading file:")
        );
    }

    #[test]
    fn test_nested_paths_are_relative_to_root() {
        let dir = TestDir::new();
        let path = dir.add_file("src/tree/walker.rs", "// walker");

        let records = ContentAggregator::new(dir.path(), 1, Progress::silent())
            .aggregate(&[path])
            .unwrap();

        assert_eq!(
            Path::new(&records[0].rel_path),
            Path::new("src/tree/walker.rs")
        );
        assert_eq!(records[0].language(), "rs");
    }

    #[test]
    fn test_empty_input() {
        let dir = TestDir::new();
        let records = ContentAggregator::new(dir.path(), 0, Progress::silent())
            .aggregate(&[])
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_text_replaces_invalid_utf8() {
        let record = FileRecord {
            rel_path: "blob.bin".to_string(),
            content: Ok(vec![b'o', b'k', 0xff]),
        };
        assert_eq!(record.text(), "ok\u{FFFD}");
        assert_eq!(record.language(), "bin");
        assert!(record.error_notice().is_none());
    }
}
