//! Per-extension file statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entry::extension_of;

/// Aggregate file counts per extension for one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirInfo {
    /// Keys of `extensions`, materialized once counting is done.
    pub extension_keys: Vec<String>,
    /// Lower-cased extension (leading dot included, or empty) to file count.
    pub extensions: BTreeMap<String, u64>,
    /// Number of non-directory entries counted.
    pub total_files: u64,
}

impl DirInfo {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file by name.
    pub fn record_file(&mut self, name: &str) {
        let ext = extension_of(name).to_lowercase();
        *self.extensions.entry(ext).or_default() += 1;
        self.total_files += 1;
    }

    /// Rebuild `extension_keys` from the current map.
    pub fn materialize_keys(&mut self) {
        self.extension_keys = self.extensions.keys().cloned().collect();
    }

    /// Count for one extension (exact, lower-cased key).
    pub fn count(&self, ext: &str) -> u64 {
        self.extensions.get(ext).copied().unwrap_or(0)
    }

    /// Sum of all per-extension counts.
    pub fn counted_files(&self) -> u64 {
        self.extensions.values().sum()
    }

    /// Check both invariants: totals agree and the key list mirrors the map.
    pub fn is_consistent(&self) -> bool {
        self.total_files == self.counted_files()
            && self.extension_keys.len() == self.extensions.len()
            && self
                .extension_keys
                .iter()
                .all(|key| self.extensions.contains_key(key))
    }

    /// Extensions ordered by count descending, then by name.
    pub fn by_count(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .extensions
            .iter()
            .map(|(ext, count)| (ext.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}
