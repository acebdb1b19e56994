//! Serial, sorted directory traversal.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use scandir_core::{ErrorPolicy, ScanError};

/// An entry handed to a [`Visitor`].
#[derive(Debug)]
pub struct WalkEntry {
    /// Root joined with the entry's relative path.
    pub path: PathBuf,
    /// Base name.
    pub name: String,
    /// Distance from the root (root is 0).
    pub depth: usize,
    /// Metadata of the entry itself; symlinks are not followed.
    pub metadata: Metadata,
}

impl WalkEntry {
    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }
}

/// Consumer of walk entries.
///
/// An error returned from [`Visitor::visit`] always ends the walk, whatever
/// the walker's [`ErrorPolicy`].
pub trait Visitor {
    /// Handle one entry.
    fn visit(&mut self, entry: &WalkEntry) -> Result<(), ScanError>;
}

/// Walks a tree pre-order with siblings sorted by name.
///
/// The root is visited first. Symbolic links are reported as entries and
/// never followed.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    policy: ErrorPolicy,
}

impl Walker {
    /// Create a walker over `root` with the given error policy.
    pub fn new(root: impl Into<PathBuf>, policy: ErrorPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// Visit every entry under the root, root included.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), ScanError> {
        let root_metadata = match fs::symlink_metadata(&self.root) {
            Ok(metadata) => metadata,
            Err(err) => return self.on_error(ScanError::io(&self.root, err)),
        };
        let descend = root_metadata.is_dir();

        visitor.visit(&WalkEntry {
            path: self.root.clone(),
            name: root_name(&self.root),
            depth: 0,
            metadata: root_metadata,
        })?;

        if !descend {
            return Ok(());
        }

        let walker = WalkDir::new(&self.root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    self.on_error(walk_error(&path, &err))?;
                    continue;
                }
            };

            let path = entry.path();

            // Root was already visited; only its listing error is left.
            if entry.depth() > 0 {
                let metadata = match entry.metadata() {
                    Ok(m) => m,
                    Err(err) => {
                        self.on_error(walk_error(&path, &err))?;
                        continue;
                    }
                };

                visitor.visit(&WalkEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    depth: entry.depth(),
                    path: path.clone(),
                    metadata,
                })?;
            }

            // A directory that could not be listed is reported after itself.
            if let Some(err) = &entry.read_children_error {
                self.on_error(walk_error(&path, err))?;
            }
        }

        Ok(())
    }

    /// Apply the error policy to an entry failure.
    fn on_error(&self, err: ScanError) -> Result<(), ScanError> {
        match self.policy {
            ErrorPolicy::Abort => Err(err),
            ErrorPolicy::Skip => {
                debug!(error = %err, "Skipping unreadable entry");
                Ok(())
            }
        }
    }
}

/// Base name of the root, or the path itself when it has none (`.`, `/`).
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

/// Convert a jwalk error into a path-annotated scan error.
fn walk_error(path: &Path, err: &jwalk::Error) -> ScanError {
    let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
    ScanError::io(path, io::Error::new(kind, err.to_string()))
}
