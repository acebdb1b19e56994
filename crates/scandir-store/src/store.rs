//! Atomic JSON files for snapshots and stats.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::Builder;
use tracing::{debug, warn};

use scandir_core::{DirInfo, FileInfo, OutputConfig};

use crate::error::StoreError;

/// Reads and writes scandir JSON files.
///
/// Output goes to a temporary file next to the destination and is renamed
/// into place only once fully written, so a failed write never leaves a
/// truncated file behind.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    config: OutputConfig,
}

impl JsonStore {
    /// Create a store with the given output settings.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write a snapshot as a JSON array.
    pub fn write_entries(&self, entries: &[FileInfo], path: &Path) -> Result<(), StoreError> {
        self.write_json(entries, path)?;
        debug!(path = %path.display(), entries = entries.len(), "Snapshot written");
        Ok(())
    }

    /// Write extension stats as a JSON object.
    pub fn save_stats(&self, stats: &DirInfo, path: &Path) -> Result<(), StoreError> {
        self.write_json(stats, path)?;
        debug!(path = %path.display(), total_files = stats.total_files, "Stats written");
        Ok(())
    }

    /// Load extension stats.
    ///
    /// `extension_keys` is rebuilt from the loaded map. A `total_files` that
    /// disagrees with the per-extension counts is rejected.
    pub fn load_stats(&self, path: &Path) -> Result<DirInfo, StoreError> {
        let mut file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut stats: DirInfo =
            serde_json::from_slice(&raw).map_err(|source| StoreError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let counted = stats.counted_files();
        if stats.total_files != counted {
            return Err(StoreError::Inconsistent {
                path: path.to_path_buf(),
                message: format!(
                    "total_files is {} but extensions sum to {counted}",
                    stats.total_files
                ),
            });
        }

        let stored_keys = std::mem::take(&mut stats.extension_keys);
        stats.materialize_keys();
        if !same_keys(&stored_keys, &stats.extension_keys) {
            warn!(path = %path.display(), "extension_keys did not match extensions, rebuilt");
        }

        Ok(stats)
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T, path: &Path) -> Result<(), StoreError> {
        let bytes = self.encode(value)?;
        write_atomic(path, &bytes)
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        let indent = vec![b' '; self.config.indent];
        let formatter = PrettyFormatter::with_indent(&indent);

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|source| StoreError::Encode { source })?;
        buf.push(b'\n');
        Ok(buf)
    }
}

fn same_keys(stored: &[String], derived: &[String]) -> bool {
    let mut stored = stored.to_vec();
    stored.sort();
    stored.dedup();
    stored == derived
}

/// Write `bytes` to a temporary file beside `path`, then rename it over `path`.
///
/// New files get the usual `0o666` minus umask; an existing file keeps its
/// permissions.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    temp.write_all(bytes).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    temp.persist(path).map_err(|err| StoreError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

/// Write a snapshot with default output settings.
pub fn write_to_json(entries: &[FileInfo], output_path: impl AsRef<Path>) -> Result<(), StoreError> {
    JsonStore::default().write_entries(entries, output_path.as_ref())
}

/// Write extension stats with default output settings.
pub fn save_stat_to_json(stat: &DirInfo, path: impl AsRef<Path>) -> Result<(), StoreError> {
    JsonStore::default().save_stats(stat, path.as_ref())
}

/// Load extension stats written by [`save_stat_to_json`].
pub fn load_stat(path: impl AsRef<Path>) -> Result<DirInfo, StoreError> {
    JsonStore::default().load_stats(path.as_ref())
}
