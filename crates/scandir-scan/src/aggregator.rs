//! Per-extension file counting.

use scandir_core::{DirInfo, ScanError};

use crate::walker::{Visitor, WalkEntry};

/// Accumulates a [`DirInfo`] from visited files; directories are ignored.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    stats: DirInfo,
}

impl StatsAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish counting and materialize the extension key list.
    pub fn finish(mut self) -> DirInfo {
        self.stats.materialize_keys();
        self.stats
    }
}

impl Visitor for StatsAggregator {
    fn visit(&mut self, entry: &WalkEntry) -> Result<(), ScanError> {
        if !entry.is_dir() {
            self.stats.record_file(&entry.name);
        }
        Ok(())
    }
}
