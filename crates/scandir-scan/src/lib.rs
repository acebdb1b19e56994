//! Directory scanning engine for scandir.
//!
//! This crate walks a directory tree and feeds every entry to a [`Visitor`].
//! Three visitors cover the supported operations:
//!
//! - [`EntryCollector`] builds the snapshot, hashing files whose names match
//!   the extension filter
//! - [`EntryCounter`] counts every entry, root included
//! - [`StatsAggregator`] counts files per lower-cased extension
//!
//! Traversal is serial and deterministic: pre-order, siblings sorted by name.
//! The error policy is picked by the operation: snapshots and counts stop at
//! the first unreadable entry, stats skip it and carry on.
//!
//! # Example
//!
//! ```rust,no_run
//! use scandir_scan::{get_stat, parse_directory};
//!
//! let entries = parse_directory("/path/to/scan", &[".txt"]).unwrap();
//! let hashed = entries.iter().filter(|e| e.hash.is_some()).count();
//! println!("{} entries, {} hashed", entries.len(), hashed);
//!
//! let stats = get_stat("/path/to/scan").unwrap();
//! println!("{} files", stats.total_files);
//! ```

mod aggregator;
mod collector;
mod counter;
mod filter;
mod hasher;
mod scanner;
mod walker;

pub use aggregator::StatsAggregator;
pub use collector::EntryCollector;
pub use counter::EntryCounter;
pub use filter::{ExtensionFilter, matches_extension};
pub use hasher::{FileHasher, calculate_hash};
pub use scanner::{DirectoryScanner, count_files, get_stat, parse_directory};
pub use walker::{Visitor, WalkEntry, Walker};

// Re-export core types for convenience
pub use scandir_core::{
    ContentHash, DirInfo, ErrorPolicy, FileInfo, HashAlgorithm, ScanConfig, ScanError,
};
