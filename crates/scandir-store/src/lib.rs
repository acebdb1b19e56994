//! JSON persistence for scandir.
//!
//! Snapshots (`Vec<FileInfo>`) are write-only artifacts; extension stats
//! (`DirInfo`) are written and read back. Both shapes use the indentation
//! configured in [`OutputConfig`] and are written atomically.
//!
//! ```rust,no_run
//! use scandir_store::{load_stat, save_stat_to_json};
//!
//! let stats = scandir_core::DirInfo::new();
//! save_stat_to_json(&stats, "stats.json").unwrap();
//!
//! match load_stat("stats.json") {
//!     Ok(stats) => println!("{} files", stats.total_files),
//!     Err(err) if err.is_not_found() => println!("no stats yet"),
//!     Err(err) => eprintln!("unusable stats file: {err}"),
//! }
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::{JsonStore, load_stat, save_stat_to_json, write_to_json};

pub use scandir_core::OutputConfig;
