//! Snapshot builder.

use scandir_core::{FileInfo, ScanConfig, ScanError};

use crate::filter::ExtensionFilter;
use crate::hasher::FileHasher;
use crate::walker::{Visitor, WalkEntry};

/// Builds one [`FileInfo`] per visited entry, hashing filtered files.
#[derive(Debug)]
pub struct EntryCollector {
    filter: ExtensionFilter,
    hasher: FileHasher,
    entries: Vec<FileInfo>,
    hashed: u64,
}

impl EntryCollector {
    /// Create a collector with an explicit filter and hasher.
    pub fn new(filter: ExtensionFilter, hasher: FileHasher) -> Self {
        Self {
            filter,
            hasher,
            entries: Vec::new(),
            hashed: 0,
        }
    }

    /// Create a collector from scan settings.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            ExtensionFilter::new(&config.extensions),
            FileHasher::from_config(config),
        )
    }

    /// Number of files hashed so far.
    pub fn hashed_count(&self) -> u64 {
        self.hashed
    }

    /// Take the collected entries in visit order.
    pub fn into_entries(self) -> Vec<FileInfo> {
        self.entries
    }
}

impl Visitor for EntryCollector {
    fn visit(&mut self, entry: &WalkEntry) -> Result<(), ScanError> {
        let mut info = FileInfo::from_metadata(&entry.path, &entry.name, &entry.metadata);

        if !info.is_dir && self.filter.matches(&entry.name) {
            let hash = self.hasher.digest(&entry.path)?;
            info = info.with_hash(hash);
            self.hashed += 1;
        }

        self.entries.push(info);
        Ok(())
    }
}
