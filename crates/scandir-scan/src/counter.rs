//! Entry counting.

use scandir_core::ScanError;

use crate::walker::{Visitor, WalkEntry};

/// Counts every visited entry, files and directories alike.
#[derive(Debug, Default)]
pub struct EntryCounter {
    count: u64,
}

impl EntryCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries counted so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Visitor for EntryCounter {
    fn visit(&mut self, _entry: &WalkEntry) -> Result<(), ScanError> {
        self.count += 1;
        Ok(())
    }
}
