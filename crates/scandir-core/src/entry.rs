//! Snapshot entry types.

use std::fmt;
use std::fs::Metadata;
use std::path::Path;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::mode::mode_string;

/// 256-bit content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Extension of a file name: everything from the last `.` on, or empty.
///
/// The case is kept as is.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// One visited filesystem object in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Path as reached by the traversal (root joined with the relative path).
    pub path: String,

    /// Base name.
    pub name: CompactString,

    /// Size in bytes.
    pub size: u64,

    /// Whether this entry is a directory.
    pub is_dir: bool,

    /// Type and permission bits, e.g. `drwxr-xr-x`.
    pub mode: CompactString,

    /// Last modification time.
    pub mod_time: DateTime<Utc>,

    /// Hex content digest, only for files selected by the extension filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Extension of `name`, not case-normalized.
    pub ext: CompactString,
}

impl FileInfo {
    /// Build a record from filesystem metadata. The hash is left empty.
    pub fn from_metadata(path: &Path, name: &str, metadata: &Metadata) -> Self {
        let modified = metadata.modified().unwrap_or(UNIX_EPOCH);

        Self {
            path: path.to_string_lossy().into_owned(),
            name: name.into(),
            size: metadata.len(),
            is_dir: metadata.is_dir(),
            mode: mode_string(metadata).into(),
            mod_time: DateTime::<Utc>::from(modified),
            hash: None,
            ext: extension_of(name).into(),
        }
    }

    /// Attach a content digest.
    pub fn with_hash(mut self, hash: ContentHash) -> Self {
        self.hash = Some(hash.to_hex());
        self
    }

    /// Check if this record carries a digest.
    pub fn has_hash(&self) -> bool {
        self.hash.is_some()
    }
}
