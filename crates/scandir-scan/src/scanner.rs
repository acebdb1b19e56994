//! Scan operations: hashed snapshot, entry count and extension stats.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use scandir_core::{DirInfo, ErrorPolicy, FileInfo, ScanConfig, ScanError};

use crate::aggregator::StatsAggregator;
use crate::collector::EntryCollector;
use crate::counter::EntryCounter;
use crate::walker::Walker;

/// Runs the three scan operations, each with its own error policy.
///
/// Snapshots and counts abort on the first unreadable entry and return
/// nothing partial. Stats skip unreadable entries.
#[derive(Debug, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Build a snapshot of `config.root`, hashing files selected by
    /// `config.extensions`.
    pub fn scan(&self, config: &ScanConfig) -> Result<Vec<FileInfo>, ScanError> {
        let start = Instant::now();
        let mut collector = EntryCollector::from_config(config);

        Walker::new(&config.root, ErrorPolicy::Abort).walk(&mut collector)?;

        let hashed = collector.hashed_count();
        let entries = collector.into_entries();
        info!(
            root = %config.root.display(),
            entries = entries.len(),
            hashed,
            algorithm = %config.algorithm,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Snapshot complete"
        );
        Ok(entries)
    }

    /// Count all entries under `root`, root included.
    pub fn count(&self, root: &Path) -> Result<u64, ScanError> {
        let mut counter = EntryCounter::new();
        Walker::new(root, ErrorPolicy::Abort).walk(&mut counter)?;

        info!(root = %root.display(), count = counter.count(), "Count complete");
        Ok(counter.count())
    }

    /// Count files per extension under `root`, skipping unreadable entries.
    pub fn stats(&self, root: &Path) -> Result<DirInfo, ScanError> {
        info!(root = %root.display(), "Collecting extension stats");

        let mut aggregator = StatsAggregator::new();
        Walker::new(root, ErrorPolicy::Skip).walk(&mut aggregator)?;

        let stats = aggregator.finish();
        info!(
            total_files = stats.total_files,
            extensions = stats.extensions.len(),
            "Stats complete"
        );
        Ok(stats)
    }
}

/// Snapshot `root` with SHA-256 hashes for files matching `extensions`.
pub fn parse_directory<S: AsRef<str>>(
    root: impl AsRef<Path>,
    extensions: &[S],
) -> Result<Vec<FileInfo>, ScanError> {
    let config = ScanConfig::new(
        root.as_ref(),
        extensions.iter().map(|ext| ext.as_ref().to_string()),
    );
    DirectoryScanner::new().scan(&config)
}

/// Number of filesystem objects under `root`, root included.
pub fn count_files(root: impl AsRef<Path>) -> Result<u64, ScanError> {
    DirectoryScanner::new().count(root.as_ref())
}

/// Per-extension file counts for `root`.
pub fn get_stat(root: impl AsRef<Path>) -> Result<DirInfo, ScanError> {
    DirectoryScanner::new().stats(root.as_ref())
}
