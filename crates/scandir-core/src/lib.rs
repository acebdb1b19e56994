//! Core types for scandir.
//!
//! This crate provides the data structures shared by the scanning engine and
//! the JSON store: per-entry snapshot records, per-extension statistics,
//! configuration and error types.

mod config;
mod entry;
mod error;
mod mode;
mod stats;

pub use config::{
    ErrorPolicy, HashAlgorithm, OutputConfig, OutputConfigBuilder, ScanConfig, ScanConfigBuilder,
    parse_extensions,
};
pub use entry::{ContentHash, FileInfo, extension_of};
pub use error::ScanError;
pub use mode::mode_string;
pub use stats::DirInfo;
